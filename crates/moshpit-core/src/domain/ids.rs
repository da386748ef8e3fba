use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de un artista en la agenda.
///
/// Se genera con UUID v4 al momento de guardar por primera vez y es
/// inmutable a partir de ahí. Se serializa como string canónico para
/// ser intercambiable con colecciones ya persistidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(Uuid);

impl ArtistId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    ArtistId(Uuid::new_v4())
  }

  /// Construye un `ArtistId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    ArtistId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for ArtistId {
  fn default() -> Self {
    ArtistId::new()
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u)
  }
}

impl From<ArtistId> for Uuid {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
