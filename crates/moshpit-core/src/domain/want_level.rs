use serde::{Deserialize, Serialize};
use std::fmt;

/// Nivel "Want to See" de un artista, en la escala fija 1..=5.
///
/// Es obligatorio: un registro sin nivel no es un `Artist` válido y se
/// rechaza antes de persistir. El estado "sin seleccionar" del formulario
/// se modela aparte con [`WantInput::Unset`], nunca con un cero centinela.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WantLevel(u8);

impl WantLevel {
  pub const MIN: u8 = 1;
  pub const MAX: u8 = 5;

  /// Todos los niveles, para los botones de filtro.
  pub const ALL: [WantLevel; 5] =
    [WantLevel(1), WantLevel(2), WantLevel(3), WantLevel(4), WantLevel(5)];

  /// Crea un nivel validado. Fuera de `1..=5` devuelve `None`.
  pub fn new(value: u8) -> Option<Self> {
    if (Self::MIN..=Self::MAX).contains(&value) { Some(WantLevel(value)) } else { None }
  }

  pub fn as_u8(&self) -> u8 {
    self.0
  }
}

impl TryFrom<u8> for WantLevel {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    WantLevel::new(value).ok_or_else(|| format!("want level out of range: {value}"))
  }
}

impl From<WantLevel> for u8 {
  fn from(level: WantLevel) -> Self {
    level.0
  }
}

impl fmt::Display for WantLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let full = self.0 as usize;

    for _ in 0..full {
      write!(f, "★")?;
    }
    for _ in full..5 {
      write!(f, "☆")?;
    }

    Ok(())
  }
}

/// Estado del nivel en el formulario de edición.
///
/// Distingue explícitamente entre:
/// - [`WantInput::Unset`]: el usuario todavía no eligió estrellas.
/// - [`WantInput::Level`]: hay un nivel válido seleccionado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WantInput {
  /// Sin selección; guardar en este estado es un error de validación.
  #[default]
  Unset,
  /// Nivel elegido.
  Level(WantLevel),
}

impl WantInput {
  pub fn level(&self) -> Option<WantLevel> {
    match self {
      WantInput::Unset => None,
      WantInput::Level(l) => Some(*l),
    }
  }
}

impl From<WantLevel> for WantInput {
  fn from(level: WantLevel) -> Self {
    WantInput::Level(level)
  }
}
