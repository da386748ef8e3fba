#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de persistencia clave-valor.
///
/// El dominio no sabe si detrás hay un archivo JSON, localStorage o una DB:
/// solo ve strings serializados bajo una clave fija. `get` de una clave
/// ausente es `None`, no error — así el caller distingue "colección nunca
/// persistida" (dispara el seeding) de una falla real de I/O.
pub trait KeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore> KeyValueStore for &T {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    (**self).set(key, value)
  }
}
