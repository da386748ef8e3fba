use crate::domain::Artist;
use crate::timetable::time::to_minutes;

/// Rectángulo calculado para un artista en la grilla, en píxeles.
///
/// `top` es relativo al inicio visible de la grilla (`start_hour`) y puede
/// ser negativo si el show arranca antes; `height` es siempre `> 0` (un
/// span no positivo nunca llega a construirse, ver [`compute_span`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub top: i32,
  pub height: i32,
}

impl Span {
  /// Decide la representación visual según la altura renderizada. Es solo
  /// una decisión de render, no transforma datos.
  pub fn tier(&self, compact_px: i32) -> BlockTier {
    if self.height < compact_px { BlockTier::Compact } else { BlockTier::Full }
  }
}

/// Representación visual de un bloque según su altura.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTier {
  /// Nombre + rango horario.
  Full,
  /// Una sola línea con el nombre; el bloque es demasiado bajo para más.
  Compact,
}

/// Resultado de ubicar un artista en la grilla.
///
/// Distingue explícitamente entre:
/// - [`Placement::Visible`]: hay rectángulo renderizable.
/// - [`Placement::Suppressed`]: el artista no se dibuja en la grilla
///   (horario faltante o duración no positiva). No es dato inválido ni un
///   error: el registro sigue apareciendo en la vista de lista.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
  Visible(Span),
  Suppressed,
}

impl Placement {
  pub fn span(&self) -> Option<Span> {
    match self {
      Placement::Visible(span) => Some(*span),
      Placement::Suppressed => None,
    }
  }
}

/// Ubica un artista en el eje vertical compartido de la grilla.
///
/// Reglas, en orden:
/// 1. cualquiera de los dos horarios vacío → `Suppressed`;
/// 2. `top = (minutos(start) - start_hour*60) * px_per_minute`;
/// 3. `height = (minutos(end) - minutos(start)) * px_per_minute`;
/// 4. `height <= 0` (fin igual o anterior al inicio, incluidos los horarios
///    malformados que parsean a 0) → `Suppressed`, silenciosamente.
///
/// No hay resolución de solapamientos: dos artistas en el mismo escenario y
/// franja se dibujan uno encima del otro. Limitación documentada del diseño.
pub fn compute_span(artist: &Artist, start_hour: u32, px_per_minute: i32) -> Placement {
  if artist.start_time.is_empty() || artist.end_time.is_empty() {
    return Placement::Suppressed;
  }

  let start = to_minutes(&artist.start_time) as i32;
  let end = to_minutes(&artist.end_time) as i32;
  let grid_start = (start_hour * 60) as i32;

  let top = (start - grid_start) * px_per_minute;
  let height = (end - start) * px_per_minute;

  if height <= 0 {
    return Placement::Suppressed;
  }

  Placement::Visible(Span { top, height })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ArtistId, Day, StageId, WantLevel};

  fn scheduled(start: &str, end: &str) -> Artist {
    Artist {
      id: ArtistId::new(),
      name: "Test".into(),
      want_level: WantLevel::new(3).unwrap(),
      watch: false,
      memo: String::new(),
      day: Some(Day::Day1),
      stage: Some(StageId::new(2)),
      start_time: start.into(),
      end_time: end.into(),
    }
  }

  #[test]
  fn test_span_at_grid_origin() {
    let artist = scheduled("10:00", "10:30");
    assert_eq!(compute_span(&artist, 10, 2), Placement::Visible(Span { top: 0, height: 60 }));
  }

  #[test]
  fn test_span_offsets_from_start_hour() {
    let artist = scheduled("20:30", "21:30");
    // 20:30 son 630 minutos después de las 10:00
    assert_eq!(compute_span(&artist, 10, 2), Placement::Visible(Span { top: 1260, height: 120 }));
  }

  #[test]
  fn test_missing_time_suppressed() {
    assert_eq!(compute_span(&scheduled("", "10:30"), 10, 2), Placement::Suppressed);
    assert_eq!(compute_span(&scheduled("10:00", ""), 10, 2), Placement::Suppressed);
  }

  #[test]
  fn test_reversed_and_equal_times_suppressed() {
    assert_eq!(compute_span(&scheduled("10:30", "10:00"), 10, 2), Placement::Suppressed);
    assert_eq!(compute_span(&scheduled("10:30", "10:30"), 10, 2), Placement::Suppressed);
  }

  #[test]
  fn test_malformed_times_suppressed_not_error() {
    // "ab:cd" parsea a 0 → duración no positiva → se suprime sin fallar
    assert_eq!(compute_span(&scheduled("ab:cd", "xy:zw"), 10, 2), Placement::Suppressed);
  }

  #[test]
  fn test_start_before_grid_gives_negative_top() {
    let artist = scheduled("09:30", "10:30");
    assert_eq!(compute_span(&artist, 10, 2), Placement::Visible(Span { top: -60, height: 120 }));
  }

  #[test]
  fn test_tier_threshold() {
    let short = Span { top: 0, height: 40 };
    let long = Span { top: 0, height: 60 };
    assert_eq!(short.tier(50), BlockTier::Compact);
    assert_eq!(long.tier(50), BlockTier::Full);
  }
}
