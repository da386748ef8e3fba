use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de un escenario.
///
/// El conjunto válido es `1..=stage_count`, donde `stage_count` viene de la
/// configuración (`[festival]`), no de este tipo: la cantidad de escenarios
/// es una constante de instancia, no arquitectura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StageId(u8);

impl StageId {
  pub fn new(n: u8) -> Self {
    StageId(n)
  }

  pub fn as_u8(&self) -> u8 {
    self.0
  }
}

impl From<u8> for StageId {
  fn from(n: u8) -> Self {
    StageId(n)
  }
}

impl fmt::Display for StageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Stage {}", self.0)
  }
}
