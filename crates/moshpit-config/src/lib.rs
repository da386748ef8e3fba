mod backend;
mod paths;
mod sections;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{ConfigError, MoshpitPaths};
pub use sections::{FestivalConfig, TimetableConfig};

use once_cell::sync::Lazy;

// Singleton de paths (override por env / system)
pub static PATHS: Lazy<MoshpitPaths> =
  Lazy::new(|| MoshpitPaths::detect().expect("failed to init MoshpitPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
