use async_trait::async_trait;

// Port de notificaciones transitorias (snackbars).
// La capa de presentación implementa esto para avisar al usuario; el
// servicio solo dispara los eventos, nunca guarda estado de UI.
#[async_trait]
pub trait Notifier {
  /// Un guardado terminó bien.
  async fn saved(&self, name: &str);

  /// Un guardado falló en persistencia (no en validación).
  async fn save_failed(&self, reason: &str);

  /// Mensaje informativo genérico.
  async fn info(&self, message: &str);
}
