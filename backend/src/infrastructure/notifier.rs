use async_trait::async_trait;
use moshpit_core::ports::Notifier;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarKind {
  Success,
  Error,
  Info,
}

/// Notificación transitoria lista para mostrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snackbar {
  pub message: String,
  pub kind: SnackbarKind,
  /// Contador monótono: dos mensajes idénticos seguidos siguen siendo
  /// eventos distintos y re-disparan la animación.
  pub key: u64,
}

/// Implementación de `Notifier` que encola snackbars para la capa de
/// presentación.
///
/// Clonable y barata de compartir: el servicio se queda con un clon para
/// emitir y la app con otro para drenar. Encolar nunca falla hacia el
/// caller: un problema de UI no debe tumbar un guardado ya persistido.
#[derive(Clone, Default)]
pub struct SnackbarNotifier {
  queue: Arc<Mutex<VecDeque<Snackbar>>>,
  counter: Arc<AtomicU64>,
}

impl SnackbarNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  fn push(&self, message: String, kind: SnackbarKind) {
    let key = self.counter.fetch_add(1, Ordering::Relaxed);
    if let Ok(mut queue) = self.queue.lock() {
      queue.push_back(Snackbar { message, kind, key });
    }
  }

  /// Drena los snackbars pendientes, en orden de emisión.
  pub fn take(&self) -> Vec<Snackbar> {
    match self.queue.lock() {
      Ok(mut queue) => queue.drain(..).collect(),
      Err(_) => Vec::new(),
    }
  }
}

#[async_trait]
impl Notifier for SnackbarNotifier {
  async fn saved(&self, name: &str) {
    self.push(format!("Artist \"{name}\" saved successfully!"), SnackbarKind::Success);
  }

  async fn save_failed(&self, reason: &str) {
    self.push(reason.to_string(), SnackbarKind::Error);
  }

  async fn info(&self, message: &str) {
    self.push(message.to_string(), SnackbarKind::Info);
  }
}
