/// Convierte `"HH:MM"` a minutos desde medianoche.
///
/// Política deliberadamente laxa: string vacío, sin separador `:` o con
/// partes no numéricas vale `0`. Así "sin horario" y "medianoche" se tratan
/// igual y el layout decide suprimir el bloque (span no positivo) en vez de
/// fallar. Nunca es un error.
pub fn to_minutes(time: &str) -> u32 {
  let Some((hours, minutes)) = time.split_once(':') else {
    return 0;
  };

  let hours: u32 = hours.parse().unwrap_or(0);
  let minutes: u32 = minutes.parse().unwrap_or(0);

  // Saturante: una hora absurda pero parseable tampoco puede reventar la
  // aritmética; el span resultante se suprime igual que cualquier basura.
  hours.saturating_mul(60).saturating_add(minutes)
}

/// Etiqueta de hora en punto para la regla de la grilla, p. ej. `"10:00"`.
pub fn hour_label(hour: u32) -> String {
  format!("{hour:02}:00")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_times() {
    assert_eq!(to_minutes("00:00"), 0);
    assert_eq!(to_minutes("10:00"), 600);
    assert_eq!(to_minutes("17:45"), 1065);
    assert_eq!(to_minutes("23:59"), 1439);
  }

  #[test]
  fn test_malformed_is_zero_not_error() {
    assert_eq!(to_minutes(""), 0);
    assert_eq!(to_minutes("1030"), 0);
    assert_eq!(to_minutes("ab:cd"), 0);
  }

  #[test]
  fn test_huge_hours_saturate_instead_of_overflowing() {
    // satura en la multiplicación de horas y en la suma de minutos
    assert_eq!(to_minutes("4294967295:30"), u32::MAX);
    assert_eq!(to_minutes("71582788:30"), u32::MAX);
  }

  #[test]
  fn test_monotonic_over_times_of_day() {
    let times = ["00:05", "09:59", "10:00", "10:01", "16:30", "23:59"];
    for pair in times.windows(2) {
      assert!(to_minutes(pair[0]) < to_minutes(pair[1]), "{} < {}", pair[0], pair[1]);
    }
  }

  #[test]
  fn test_hour_label_pads() {
    assert_eq!(hour_label(9), "09:00");
    assert_eq!(hour_label(23), "23:00");
  }
}
