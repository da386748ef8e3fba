use crate::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use moshpit_core::domain::StageId;
use serde::{Deserialize, Serialize};

/// Sección `[timetable]`: geometría de la grilla horaria.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TimetableConfig {
  /// Primera hora visible de la grilla.
  #[serde(default = "default_start_hour")]
  pub start_hour: u32,

  /// Última hora visible (inclusive para las etiquetas).
  #[serde(default = "default_end_hour")]
  pub end_hour: u32,

  /// Escala vertical. 2 px/min da targets táctiles razonables en mobile.
  #[serde(default = "default_px_per_minute")]
  pub px_per_minute: i32,

  /// Umbral de altura bajo el cual un bloque se dibuja compacto.
  #[serde(default = "default_compact_px")]
  pub compact_px: i32,
}

fn default_start_hour() -> u32 {
  10
}

fn default_end_hour() -> u32 {
  23
}

fn default_px_per_minute() -> i32 {
  2
}

fn default_compact_px() -> i32 {
  50
}

impl Default for TimetableConfig {
  fn default() -> Self {
    TimetableConfig {
      start_hour: default_start_hour(),
      end_hour: default_end_hour(),
      px_per_minute: default_px_per_minute(),
      compact_px: default_compact_px(),
    }
  }
}

impl TimetableConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("timetable")?;
    CONFIG_BACKEND.save_section("timetable", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("timetable", self)
  }
}

/// Sección `[festival]`: forma de la instancia concreta del festival.
///
/// La cantidad de escenarios es una constante de configuración, no de
/// arquitectura: el layout funciona igual con 3 que con 10 columnas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FestivalConfig {
  #[serde(default = "default_stage_count")]
  pub stage_count: u8,
}

fn default_stage_count() -> u8 {
  6
}

impl Default for FestivalConfig {
  fn default() -> Self {
    FestivalConfig { stage_count: default_stage_count() }
  }
}

impl FestivalConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("festival")?;
    CONFIG_BACKEND.save_section("festival", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("festival", self)
  }

  /// Conjunto ordenado de ids de escenario: `1..=stage_count`.
  pub fn stage_ids(&self) -> Vec<StageId> {
    (1..=self.stage_count).map(StageId::new).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_reference_instance() {
    let t = TimetableConfig::default();
    assert_eq!((t.start_hour, t.end_hour, t.px_per_minute, t.compact_px), (10, 23, 2, 50));

    let f = FestivalConfig::default();
    assert_eq!(f.stage_count, 6);
    assert_eq!(f.stage_ids().len(), 6);
    assert_eq!(f.stage_ids()[0], StageId::new(1));
  }

  #[test]
  fn test_partial_section_fills_missing_fields() {
    let t: TimetableConfig = toml::from_str("start_hour = 12").unwrap();
    assert_eq!(t.start_hour, 12);
    assert_eq!(t.end_hour, 23);
    assert_eq!(t.px_per_minute, 2);
  }
}
