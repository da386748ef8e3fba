use futures::executor::block_on;
use moshpit_core::domain::{ArtistDraft, Day, StageId, WantInput, WantLevel};

fn main() -> anyhow::Result<()> {
  let mut app = moshpit::init()?;

  println!("Agenda cargada: {} artistas", app.artists().len());
  for artist in app.artists() {
    println!("  {} {}", artist.want_level, artist.name);
  }

  let draft = ArtistDraft {
    name: "Smoke Test Band".into(),
    want: WantInput::Level(WantLevel::new(2).expect("2 esta en dominio")),
    memo: "alta de prueba del smoke bin".into(),
    day: Some(Day::Day1),
    stage: Some(StageId::new(5)),
    start_time: "11:00".into(),
    end_time: "11:30".into(),
    ..Default::default()
  };

  let id = block_on(app.save_artist(draft))?;
  println!("Guardado id = {id}");

  for snackbar in app.notifier().take() {
    println!("snackbar: {}", snackbar.message);
  }

  let columns = app.timetable_columns();
  for (stage, entries) in &columns {
    if !entries.is_empty() {
      println!("{stage}: {} bloques", entries.len());
    }
  }

  Ok(())
}
