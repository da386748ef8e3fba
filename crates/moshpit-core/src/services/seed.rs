use crate::domain::{Artist, ArtistId, Day, StageId, WantLevel};

fn seed(name: &str, level: u8, watch: bool, memo: &str, day: Day, stage: u8, start: &str, end: &str) -> Artist {
  Artist {
    id: ArtistId::new(),
    name: name.into(),
    // los niveles del seed son literales dentro de 1..=5
    want_level: WantLevel::new(level).unwrap(),
    watch,
    memo: memo.into(),
    day: Some(day),
    stage: Some(StageId::new(stage)),
    start_time: start.into(),
    end_time: end.into(),
  }
}

/// Set fijo de artistas de ejemplo para el bootstrap inicial.
///
/// Se instala una sola vez, cuando la colección persistida está ausente o
/// vacía; nunca se mergea sobre estado existente. Los ids se acuñan en cada
/// llamada.
pub fn initial_artists() -> Vec<Artist> {
  vec![
    seed(
      "Punk Rock Superstars",
      5,
      true,
      "Absolute must-see! Main stage headliner.",
      Day::Day1,
      1,
      "20:30",
      "21:30",
    ),
    seed(
      "Ska Revivalists",
      4,
      false,
      "Could be fun, check out if no conflicts.",
      Day::Day1,
      3,
      "17:00",
      "17:45",
    ),
    seed("Emo Throwback", 3, true, "Nostalgia trip!", Day::Day2, 2, "19:00", "19:45"),
    seed(
      "Hardcore Heroes",
      4,
      false,
      "High energy, mosh pit expected.",
      Day::Day2,
      4,
      "16:00",
      "16:45",
    ),
  ]
}
