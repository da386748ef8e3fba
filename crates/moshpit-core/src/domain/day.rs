use serde::{Deserialize, Serialize};
use std::fmt;

/// Día del festival.
///
/// El formato serializado (`"Day1"` / `"Day2"`) es parte del contrato de
/// persistencia: no renombrar las variantes sin migración.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
  Day1,
  Day2,
}

impl Day {
  /// Todos los días, en orden de tabs.
  pub const ALL: [Day; 2] = [Day::Day1, Day::Day2];
}

impl fmt::Display for Day {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Day::Day1 => write!(f, "Day1"),
      Day::Day2 => write!(f, "Day2"),
    }
  }
}
