use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use moshpit_core::ports::{KeyValueStore, StoreError};

/// Adapter de persistencia clave-valor sobre archivos JSON.
///
/// Cada clave vive en su propio archivo `<clave>.json` dentro de `dir`.
/// `get` de una clave sin archivo es `None` (colección nunca persistida);
/// `set` escribe de forma atómica para que un corte a mitad de escritura no
/// deje el blob a medias.
pub struct JsonFileStore {
  dir: PathBuf,
}

impl JsonFileStore {
  pub fn new(dir: PathBuf) -> Result<Self, StoreError> {
    std::fs::create_dir_all(&dir).map_err(|e| StoreError::Storage(e.to_string()))?;
    Ok(Self { dir })
  }

  /// Store sobre el data dir detectado por la config.
  pub fn new_from_config() -> Result<Self, StoreError> {
    Self::new(moshpit_config::PATHS.data_dir.clone())
  }

  fn key_path(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl KeyValueStore for JsonFileStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    moshpit_fs::read_to_string_opt(&self.key_path(key)).map_err(|e| StoreError::Storage(e.to_string()))
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    moshpit_fs::atomic_write_str(&self.key_path(key), value)
      .map_err(|e| StoreError::Storage(e.to_string()))
  }
}

/// Store en memoria para tests y wiring descartable.
#[derive(Debug, Default)]
pub struct MemoryStore {
  map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Acceso directo para asserts en tests.
  pub fn raw(&self, key: &str) -> Option<String> {
    self.map.borrow().get(key).cloned()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.map.borrow().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.map.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Store que rechaza toda escritura; ejercita el camino de error de
/// persistencia sin tocar el disco.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
  fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
    Ok(None)
  }

  fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
    Err(StoreError::Storage("write rejected".into()))
  }
}
