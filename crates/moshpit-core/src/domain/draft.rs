use crate::domain::day::Day;
use crate::domain::ids::ArtistId;
use crate::domain::stage::StageId;
use crate::domain::want_level::WantInput;

/// Payload de "guardar artista" tal como sale del formulario.
///
/// - `id: None` → alta: el store acuña un id fresco y agrega el registro.
/// - `id: Some` → edición: se reemplaza el registro existente en su lugar.
///
/// A diferencia de [`crate::domain::Artist`], acá el nivel puede estar sin
/// elegir ([`WantInput::Unset`]); convertir el draft en entidad es
/// responsabilidad de la validación del servicio.
#[derive(Debug, Clone, Default)]
pub struct ArtistDraft {
  pub id: Option<ArtistId>,
  pub name: String,
  pub want: WantInput,
  pub watch: bool,
  pub memo: String,
  pub day: Option<Day>,
  pub stage: Option<StageId>,
  pub start_time: String,
  pub end_time: String,
}

impl ArtistDraft {
  /// Draft pre-cargado para editar un artista existente.
  pub fn from_artist(artist: &crate::domain::Artist) -> Self {
    ArtistDraft {
      id: Some(artist.id),
      name: artist.name.clone(),
      want: WantInput::Level(artist.want_level),
      watch: artist.watch,
      memo: artist.memo.clone(),
      day: artist.day,
      stage: artist.stage,
      start_time: artist.start_time.clone(),
      end_time: artist.end_time.clone(),
    }
  }
}
