use crate::domain::{Artist, Day, StageId};
use crate::timetable::layout::{BlockTier, Placement, Span, compute_span};
use crate::timetable::time::hour_label;

/// Un artista ya ubicado dentro de la columna de un escenario.
#[derive(Debug, Clone, Copy)]
pub struct StageEntry<'a> {
  pub artist: &'a Artist,
  pub span: Span,
}

/// Geometría de la grilla horaria.
///
/// Eje vertical único (tiempo) compartido por todos los escenarios; eje
/// horizontal particionado en columnas de ancho fijo, una por escenario.
/// Los cuatro parámetros vienen de la sección `[timetable]` de la config.
#[derive(Debug, Clone, Copy)]
pub struct TimetableGrid {
  pub start_hour: u32,
  pub end_hour: u32,
  pub px_per_minute: i32,
  pub compact_px: i32,
}

impl TimetableGrid {
  pub fn new(start_hour: u32, end_hour: u32, px_per_minute: i32, compact_px: i32) -> Self {
    TimetableGrid { start_hour, end_hour, px_per_minute, compact_px }
  }

  /// Horas que abarca la grilla. Un rango invertido en la config cuenta
  /// como cero, no como underflow: la grilla queda vacía pero viva.
  fn span_hours(&self) -> i32 {
    self.end_hour.saturating_sub(self.start_hour) as i32
  }

  /// Altura total direccionable de la grilla en píxeles.
  pub fn total_height(&self) -> i32 {
    self.span_hours() * 60 * self.px_per_minute
  }

  /// Etiquetas de hora de la regla, de `start_hour` a `end_hour` inclusive.
  pub fn hour_labels(&self) -> Vec<String> {
    (self.start_hour..=self.end_hour).map(hour_label).collect()
  }

  /// Offsets verticales de las líneas de hora dentro de una columna.
  pub fn gridline_offsets(&self) -> Vec<i32> {
    (0..self.span_hours()).map(|i| i * 60 * self.px_per_minute).collect()
  }

  /// Ubica un artista en el eje vertical.
  pub fn place(&self, artist: &Artist) -> Placement {
    compute_span(artist, self.start_hour, self.px_per_minute)
  }

  /// Representación visual que le toca a un span ya calculado.
  pub fn tier(&self, span: Span) -> BlockTier {
    span.tier(self.compact_px)
  }

  /// Filtro de la vista de grilla: día seleccionado y, opcionalmente, solo
  /// watchlist. Es deliberadamente más simple que el pipeline de la lista y
  /// no comparte estado con él.
  pub fn for_day<'a>(&self, artists: &'a [Artist], day: Day, watch_only: bool) -> Vec<&'a Artist> {
    artists
      .iter()
      .filter(|a| a.day == Some(day))
      .filter(|a| !watch_only || a.watch)
      .collect()
  }

  /// Columna de un escenario: artistas del día filtrado que pertenecen al
  /// escenario, con su span calculado. Las entradas suprimidas simplemente
  /// no aparecen; los solapamientos se devuelven tal cual.
  pub fn column<'a>(&self, day_artists: &[&'a Artist], stage: StageId) -> Vec<StageEntry<'a>> {
    day_artists
      .iter()
      .filter(|a| a.stage == Some(stage))
      .filter_map(|a| self.place(a).span().map(|span| StageEntry { artist: a, span }))
      .collect()
  }
}
