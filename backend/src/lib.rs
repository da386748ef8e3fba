mod app;
mod config;
mod form;
mod infrastructure;

pub use app::{App, AppState, ListState, TimetableState, View, WatchFilter, grid_from};
pub use config::TimetableConfigDto;
pub use form::ArtistForm;
pub use infrastructure::notifier::{Snackbar, SnackbarKind, SnackbarNotifier};

use anyhow::Context;
use moshpit_config::{FestivalConfig, TimetableConfig};
use moshpit_storage::JsonFileStore;

/// Arma la aplicación completa contra el data dir real.
pub fn init() -> anyhow::Result<App<JsonFileStore, SnackbarNotifier>> {
  // --- Fase de inyección de dependencias ---

  // 1. Adapter de persistencia (archivos JSON en el data dir).
  let store = JsonFileStore::new_from_config().context("init json store")?;

  // 2. Adapter de notificaciones (cola de snackbars para la UI).
  let notifier = SnackbarNotifier::new();

  // 3. Configuración de instancia: geometría de la grilla y escenarios.
  let timetable = TimetableConfig::load().context("load [timetable]")?;
  let festival = FestivalConfig::load().context("load [festival]")?;

  // 4. Servicio + estado inicial de la app (bootstrap incluido).
  App::init(store, notifier, timetable, festival).context("bootstrap schedule")
}
