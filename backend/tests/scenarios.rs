//! Escenarios de punta a punta: store → servicio → vistas.

use futures::executor::block_on;
use moshpit::{App, SnackbarKind, SnackbarNotifier, View, WatchFilter};
use moshpit_config::{FestivalConfig, TimetableConfig};
use moshpit_core::CoreError;
use moshpit_core::domain::{ArtistDraft, Day, StageId, WantInput, WantLevel};
use moshpit_core::listing::SortOrder;
use moshpit_core::ports::{KeyValueStore, StoreError};
use moshpit_core::timetable::Span;
use moshpit_storage::{FailingStore, JsonFileStore, MemoryStore};

fn fresh_app() -> App<MemoryStore, SnackbarNotifier> {
  App::init(
    MemoryStore::new(),
    SnackbarNotifier::new(),
    TimetableConfig::default(),
    FestivalConfig::default(),
  )
  .unwrap()
}

fn draft(name: &str, level: u8, day: Day, stage: u8, start: &str, end: &str) -> ArtistDraft {
  ArtistDraft {
    name: name.into(),
    want: WantInput::Level(WantLevel::new(level).unwrap()),
    day: Some(day),
    stage: Some(StageId::new(stage)),
    start_time: start.into(),
    end_time: end.into(),
    ..Default::default()
  }
}

#[test]
fn empty_store_bootstraps_exactly_the_seed_set() {
  let app = fresh_app();
  assert_eq!(app.artists().len(), 4);

  let names: Vec<&str> = app.artists().iter().map(|a| a.name.as_str()).collect();
  assert_eq!(
    names,
    ["Punk Rock Superstars", "Ska Revivalists", "Emo Throwback", "Hardcore Heroes"]
  );
}

#[test]
fn saved_artist_lands_on_its_stage_with_exact_span() {
  let mut app = fresh_app();
  block_on(app.save_artist(draft("X", 3, Day::Day1, 2, "10:00", "10:30"))).unwrap();

  let columns = app.timetable_columns();
  let (stage, entries) = columns.iter().find(|(s, _)| s.as_u8() == 2).unwrap();
  assert_eq!(stage.as_u8(), 2);
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].artist.name, "X");
  // 30 minutos * 2 px/min, arrancando justo en el inicio de la grilla
  assert_eq!(entries[0].span, Span { top: 0, height: 60 });
}

#[test]
fn reversed_times_show_in_list_but_not_in_grid() {
  let mut app = fresh_app();
  block_on(app.save_artist(draft("Backwards", 3, Day::Day1, 2, "10:30", "10:00"))).unwrap();

  app.state.list.filter.query = "backwards".into();
  assert_eq!(app.visible_list().len(), 1);

  let in_grid: usize = app
    .timetable_columns()
    .iter()
    .map(|(_, entries)| entries.iter().filter(|e| e.artist.name == "Backwards").count())
    .sum();
  assert_eq!(in_grid, 0);
}

#[test]
fn list_combines_level_and_watch_filters_with_stable_order() {
  let mut app = fresh_app();
  block_on(app.save_artist(draft("Another Headliner", 5, Day::Day2, 1, "22:00", "23:00"))).unwrap();
  // el nuevo headliner también está en watchlist
  {
    let id = app.visible_list().iter().find(|a| a.name == "Another Headliner").unwrap().id;
    let mut edit = ArtistDraft::from_artist(app.artists().iter().find(|a| a.id == id).unwrap());
    edit.watch = true;
    block_on(app.save_artist(edit)).unwrap();
  }

  app.state.list.filter.want_levels = vec![WantLevel::new(5).unwrap()];
  app.state.list.filter.watch_only = true;
  app.state.list.order = SortOrder::Desc;

  let visible = app.visible_list();
  let names: Vec<&str> = visible.iter().map(|a| a.name.as_str()).collect();
  // solo nivel 5 + watch, desempate ascendente por nombre
  assert_eq!(names, ["Another Headliner", "Punk Rock Superstars"]);
  assert!(visible.iter().all(|a| a.watch && a.want_level.as_u8() == 5));
}

#[test]
fn unset_want_level_never_reaches_the_store() {
  let store = MemoryStore::new();
  let notifier = SnackbarNotifier::new();

  // estado persistido previo: el seed del primer arranque
  {
    let _ = App::init(&store, notifier.clone(), TimetableConfig::default(), FestivalConfig::default())
      .unwrap();
  }
  let before = store.raw("moshpitArtists").unwrap();

  let mut app =
    App::init(&store, notifier, TimetableConfig::default(), FestivalConfig::default()).unwrap();
  let mut d = draft("No Stars", 1, Day::Day1, 1, "12:00", "12:30");
  d.want = WantInput::Unset;

  let err = block_on(app.save_artist(d)).unwrap_err();
  assert!(matches!(err, CoreError::Validation(_)));
  assert_eq!(store.raw("moshpitArtists").unwrap(), before);
}

/// Acepta las primeras `allowed` escrituras (el seed) y rechaza el resto.
struct FlakyStore {
  inner: MemoryStore,
  allowed: std::cell::Cell<u32>,
}

impl KeyValueStore for FlakyStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    self.inner.get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    let left = self.allowed.get();
    if left == 0 {
      return Err(StoreError::Storage("disk full".into()));
    }
    self.allowed.set(left - 1);
    self.inner.set(key, value)
  }
}

#[test]
fn bootstrap_cannot_persist_seed_is_an_error() {
  let result = App::init(
    FailingStore,
    SnackbarNotifier::new(),
    TimetableConfig::default(),
    FestivalConfig::default(),
  );
  assert!(matches!(result, Err(CoreError::Storage(_))));
}

#[test]
fn persistence_failure_surfaces_retry_snackbar_and_keeps_memory() {
  let store = FlakyStore { inner: MemoryStore::new(), allowed: std::cell::Cell::new(1) };
  let notifier = SnackbarNotifier::new();
  let mut app =
    App::init(store, notifier.clone(), TimetableConfig::default(), FestivalConfig::default())
      .unwrap();

  let err = block_on(app.save_artist(draft("Doomed", 1, Day::Day1, 1, "12:00", "12:30")));
  assert!(matches!(err, Err(CoreError::Storage(_))));

  // estado en memoria tal como se intentó (sin rollback, gap conocido)
  assert_eq!(app.artists().len(), 5);

  let snackbars = notifier.take();
  assert_eq!(snackbars.len(), 1);
  assert_eq!(snackbars[0].kind, SnackbarKind::Error);
  assert_eq!(snackbars[0].message, "Save failed. Please try again.");
}

#[test]
fn schedule_survives_process_restart_on_disk() {
  let tmp = tempfile::tempdir().unwrap();

  {
    let store = JsonFileStore::new(tmp.path().to_path_buf()).unwrap();
    let mut app = App::init(
      store,
      SnackbarNotifier::new(),
      TimetableConfig::default(),
      FestivalConfig::default(),
    )
    .unwrap();
    block_on(app.save_artist(draft("Persisted", 2, Day::Day2, 6, "18:00", "18:40"))).unwrap();
  }

  // "reinicio": nuevo store sobre el mismo dir, sin re-seedear
  let store = JsonFileStore::new(tmp.path().to_path_buf()).unwrap();
  let app = App::init(
    store,
    SnackbarNotifier::new(),
    TimetableConfig::default(),
    FestivalConfig::default(),
  )
  .unwrap();

  assert_eq!(app.artists().len(), 5);
  assert!(app.artists().iter().any(|a| a.name == "Persisted"));
}

#[test]
fn success_snackbar_carries_the_artist_name() {
  let mut app = fresh_app();
  app.set_view(View::ArtistList);
  block_on(app.save_artist(draft("Named", 4, Day::Day1, 1, "12:00", "12:45"))).unwrap();

  let snackbars = app.notifier().take();
  assert_eq!(snackbars.len(), 1);
  assert_eq!(snackbars[0].kind, SnackbarKind::Success);
  assert_eq!(snackbars[0].message, "Artist \"Named\" saved successfully!");
}

#[test]
fn watch_tab_and_day_tab_are_independent_of_list_state() {
  let mut app = fresh_app();
  app.state.list.filter.query = "zzz no match".into();
  app.set_watch_filter(WatchFilter::Watch);
  app.select_day(Day::Day2);

  // la grilla ignora por completo el filtro de la lista
  let total: usize = app.timetable_columns().iter().map(|(_, c)| c.len()).sum();
  assert_eq!(total, 1); // Emo Throwback, watch=true en Day2
  assert!(app.visible_list().is_empty());
}
