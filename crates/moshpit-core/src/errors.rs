use thiserror::Error;

/// Error genérico del núcleo de moshpit.
///
/// Las capas superiores (app, tests, futura UI) deberían mapear este error
/// a mensajes de usuario. `Validation` ya trae el texto listo para mostrar
/// inline en el formulario; `Storage` amerita un snackbar con retry.
#[derive(Debug, Error)]
pub enum CoreError {
  /// El input del usuario viola una regla de dominio. Recuperable localmente:
  /// el formulario conserva sus datos y nada llega al store.
  #[error("{0}")]
  Validation(String),

  /// Falló el colaborador de persistencia. No recuperable localmente;
  /// se propaga para que la presentación ofrezca reintentar.
  #[error("storage error: {0}")]
  Storage(String),

  #[error("not found")]
  NotFound,
}
