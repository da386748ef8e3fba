use moshpit_config::TimetableConfig;
use serde::{Deserialize, Serialize};

/// DTO de la sección `[timetable]` para la futura capa de presentación.
#[derive(Debug, Serialize, Deserialize)]
pub struct TimetableConfigDto {
  pub start_hour: u32,
  pub end_hour: u32,
  pub px_per_minute: i32,
  pub compact_px: i32,
}

impl From<TimetableConfig> for TimetableConfigDto {
  fn from(cfg: TimetableConfig) -> Self {
    TimetableConfigDto {
      start_hour: cfg.start_hour,
      end_hour: cfg.end_hour,
      px_per_minute: cfg.px_per_minute,
      compact_px: cfg.compact_px,
    }
  }
}

impl From<TimetableConfigDto> for TimetableConfig {
  fn from(dto: TimetableConfigDto) -> Self {
    TimetableConfig {
      start_hour: dto.start_hour,
      end_hour: dto.end_hour,
      px_per_minute: dto.px_per_minute,
      compact_px: dto.compact_px,
    }
  }
}
