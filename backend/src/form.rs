use moshpit_core::CoreError;
use moshpit_core::domain::{Artist, ArtistDraft, ArtistId, Day, StageId, WantInput, WantLevel};

/// Estado del formulario "Add / Edit Artist".
///
/// Espejo mutable de [`ArtistDraft`] más el ciclo de vida del mensaje de
/// validación. Dos reglas viven acá y no en el store:
/// - el nombre no puede quedar en blanco (el botón Guardar ni se habilita);
/// - al elegir estrellas se limpia un error de validación pendiente.
#[derive(Debug, Clone, Default)]
pub struct ArtistForm {
  /// `Some` cuando se edita un artista existente; `None` en un alta.
  pub target: Option<ArtistId>,
  pub name: String,
  pub want: WantInput,
  pub watch: bool,
  pub memo: String,
  pub day: Option<Day>,
  pub stage: Option<StageId>,
  pub start_time: String,
  pub end_time: String,
  pub validation_error: Option<String>,
}

impl ArtistForm {
  /// Formulario vacío para un alta.
  pub fn blank() -> Self {
    Self::default()
  }

  /// Formulario pre-cargado para editar.
  pub fn editing(artist: &Artist) -> Self {
    ArtistForm {
      target: Some(artist.id),
      name: artist.name.clone(),
      want: WantInput::Level(artist.want_level),
      watch: artist.watch,
      memo: artist.memo.clone(),
      day: artist.day,
      stage: artist.stage,
      start_time: artist.start_time.clone(),
      end_time: artist.end_time.clone(),
      validation_error: None,
    }
  }

  /// Elegir estrellas limpia el error pendiente.
  pub fn set_want(&mut self, level: WantLevel) {
    self.want = WantInput::Level(level);
    self.validation_error = None;
  }

  /// El botón Guardar solo se habilita con nombre no vacío.
  pub fn can_save(&self) -> bool {
    !self.name.trim().is_empty()
  }

  /// Payload para el servicio. El formulario conserva sus datos: si el
  /// guardado falla, el usuario no pierde lo tipeado.
  pub fn to_draft(&self) -> ArtistDraft {
    ArtistDraft {
      id: self.target,
      name: self.name.clone(),
      want: self.want,
      watch: self.watch,
      memo: self.memo.clone(),
      day: self.day,
      stage: self.stage,
      start_time: self.start_time.clone(),
      end_time: self.end_time.clone(),
    }
  }

  /// Refleja un error del servicio: los de validación van inline; los de
  /// storage los muestra el snackbar, no el formulario.
  pub fn apply_error(&mut self, error: &CoreError) {
    if let CoreError::Validation(message) = error {
      self.validation_error = Some(message.clone());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_blank_name_blocks_save() {
    let mut form = ArtistForm::blank();
    assert!(!form.can_save());

    form.name = "   ".into();
    assert!(!form.can_save());

    form.name = "My Chemical Romance".into();
    assert!(form.can_save());
  }

  #[test]
  fn test_choosing_stars_clears_pending_error() {
    let mut form = ArtistForm::blank();
    form.apply_error(&CoreError::Validation("\"Want to See\" level is required.".into()));
    assert!(form.validation_error.is_some());

    form.set_want(WantLevel::new(4).unwrap());
    assert!(form.validation_error.is_none());
    assert_eq!(form.want.level().map(|l| l.as_u8()), Some(4));
  }

  #[test]
  fn test_storage_error_is_not_inline() {
    let mut form = ArtistForm::blank();
    form.apply_error(&CoreError::Storage("disk full".into()));
    assert!(form.validation_error.is_none());
  }

  #[test]
  fn test_to_draft_keeps_target_id() {
    let artist = moshpit_core::services::seed::initial_artists().remove(0);
    let form = ArtistForm::editing(&artist);
    let draft = form.to_draft();
    assert_eq!(draft.id, Some(artist.id));
    assert_eq!(draft.name, artist.name);
  }
}
