use crate::domain::day::Day;
use crate::domain::ids::ArtistId;
use crate::domain::stage::StageId;
use crate::domain::want_level::WantLevel;
use serde::{Deserialize, Serialize};

/// Un artista dentro de la agenda personal del festival.
///
/// Es la única entidad del sistema: junta el interés del usuario
/// (`want_level`, `watch`, `memo`) con una ubicación opcional en la grilla
/// (`day` + `stage` + horarios). La forma serializada (nombres camelCase,
/// `day`/`stage` nulos, horarios como strings `"HH:MM"` o vacíos) es el
/// contrato con colecciones ya persistidas: no cambiarla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
  /// Identificador único, asignado al crear, inmutable después.
  pub id: ArtistId,

  /// Nombre para mostrar. Que no sea vacío lo garantiza la validación del
  /// formulario, no el store.
  pub name: String,

  /// Nivel "Want to See" (1..=5). Obligatorio.
  pub want_level: WantLevel,

  /// Marcado para la vista "My Watchlist".
  pub watch: bool,

  /// Notas libres del usuario; puede ser vacío.
  pub memo: String,

  /// Día asignado; `None` = sin agendar.
  pub day: Option<Day>,

  /// Escenario asignado; `None` = sin agendar.
  pub stage: Option<StageId>,

  /// Hora de inicio `"HH:MM"`; string vacío = sin horario.
  pub start_time: String,

  /// Hora de fin `"HH:MM"`; string vacío = sin horario. No se exige que sea
  /// posterior a `start_time`: ese caso degenerado lo suprime el layout.
  pub end_time: String,
}

impl Artist {
  /// Un artista "agendado" tiene día, escenario y ambos horarios. Solo esos
  /// son elegibles para la grilla; el resto aparece únicamente en la lista.
  pub fn is_scheduled(&self) -> bool {
    self.day.is_some()
      && self.stage.is_some()
      && !self.start_time.is_empty()
      && !self.end_time.is_empty()
  }
}
