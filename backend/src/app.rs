use moshpit_config::{FestivalConfig, TimetableConfig};
use moshpit_core::CoreError;
use moshpit_core::domain::{Artist, ArtistDraft, ArtistId, Day, StageId};
use moshpit_core::listing::{self, ListFilter, SortOrder};
use moshpit_core::ports::{KeyValueStore, Notifier};
use moshpit_core::services::ScheduleService;
use moshpit_core::timetable::{StageEntry, TimetableGrid};

use crate::form::ArtistForm;

/// Vista activa de la app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
  #[default]
  Timetable,
  ArtistList,
}

/// Tabs "All Artists" / "My Watchlist" de la grilla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchFilter {
  #[default]
  All,
  Watch,
}

impl WatchFilter {
  pub fn watch_only(&self) -> bool {
    matches!(self, WatchFilter::Watch)
  }
}

/// Estado propio de la vista de grilla. No se comparte con la lista.
#[derive(Debug, Clone, Copy)]
pub struct TimetableState {
  pub day: Day,
  pub watch: WatchFilter,
}

impl Default for TimetableState {
  fn default() -> Self {
    TimetableState { day: Day::Day1, watch: WatchFilter::All }
  }
}

/// Estado propio de la vista de lista.
#[derive(Debug, Clone, Default)]
pub struct ListState {
  pub filter: ListFilter,
  pub order: SortOrder,
}

/// Estado de UI completo, explícito y sin singletons de proceso: vista
/// activa, modal de edición (`Some` = abierto) y filtros por vista.
#[derive(Debug, Clone, Default)]
pub struct AppState {
  pub view: View,
  pub editor: Option<ArtistForm>,
  pub timetable: TimetableState,
  pub list: ListState,
}

/// Construye la grilla a partir de la sección `[timetable]`.
pub fn grid_from(cfg: &TimetableConfig) -> TimetableGrid {
  TimetableGrid::new(cfg.start_hour, cfg.end_hour, cfg.px_per_minute, cfg.compact_px)
}

/// La aplicación armada: servicio de agenda + estado de UI + geometría.
///
/// Único hilo lógico de control; las mutaciones son síncronas y atómicas
/// desde el punto de vista del resto del sistema. `submit_editor` es async
/// solo en la forma (el caller muestra un spinner), no en el scheduling.
pub struct App<K, N>
where
  K: KeyValueStore,
  N: Notifier + Clone,
{
  schedule: ScheduleService<K, N>,
  notifier: N,
  grid: TimetableGrid,
  stages: Vec<StageId>,
  pub state: AppState,
}

impl<K, N> App<K, N>
where
  K: KeyValueStore,
  N: Notifier + Clone,
{
  pub fn init(
    store: K,
    notifier: N,
    timetable: TimetableConfig,
    festival: FestivalConfig,
  ) -> Result<Self, CoreError> {
    let mut schedule = ScheduleService::new(store, notifier.clone());
    schedule.bootstrap()?;

    Ok(App {
      schedule,
      notifier,
      grid: grid_from(&timetable),
      stages: festival.stage_ids(),
      state: AppState::default(),
    })
  }

  // -------- comandos --------

  pub fn set_view(&mut self, view: View) {
    self.state.view = view;
  }

  pub fn select_day(&mut self, day: Day) {
    self.state.timetable.day = day;
  }

  pub fn set_watch_filter(&mut self, watch: WatchFilter) {
    self.state.timetable.watch = watch;
  }

  /// Abre el modal: `Some(id)` para editar, `None` para un alta.
  pub fn open_editor(&mut self, target: Option<ArtistId>) {
    self.state.editor = Some(match target.and_then(|id| self.schedule.find(id)) {
      Some(artist) => ArtistForm::editing(artist),
      None => ArtistForm::blank(),
    });
  }

  /// Cierra el modal descartando el formulario.
  pub fn close_editor(&mut self) {
    self.state.editor = None;
  }

  /// Guarda el formulario abierto.
  ///
  /// - Validación fallida → el mensaje queda inline en el formulario, el
  ///   modal sigue abierto, `Ok(None)`.
  /// - Falla de persistencia → se propaga (la presentación ofrece retry);
  ///   el modal conserva lo tipeado.
  /// - Éxito → cierra el modal y devuelve el id.
  pub async fn submit_editor(&mut self) -> Result<Option<ArtistId>, CoreError> {
    let Some(form) = self.state.editor.as_ref() else {
      return Ok(None);
    };
    if !form.can_save() {
      return Ok(None);
    }

    let draft = form.to_draft();
    match self.schedule.save(draft).await {
      Ok(id) => {
        self.state.editor = None;
        Ok(Some(id))
      }
      Err(err) => {
        if let Some(form) = self.state.editor.as_mut() {
          form.apply_error(&err);
        }
        match err {
          CoreError::Validation(_) => Ok(None),
          other => Err(other),
        }
      }
    }
  }

  /// Guardado directo, sin pasar por el modal (tests, import futuro).
  pub async fn save_artist(&mut self, draft: ArtistDraft) -> Result<ArtistId, CoreError> {
    self.schedule.save(draft).await
  }

  // -------- consultas --------

  pub fn artists(&self) -> &[Artist] {
    self.schedule.artists()
  }

  pub fn grid(&self) -> &TimetableGrid {
    &self.grid
  }

  pub fn stages(&self) -> &[StageId] {
    &self.stages
  }

  pub fn notifier(&self) -> &N {
    &self.notifier
  }

  /// Vista de lista: subconjunto filtrado y ordenado según `state.list`.
  pub fn visible_list(&self) -> Vec<Artist> {
    listing::visible(self.schedule.artists(), &self.state.list.filter, self.state.list.order)
  }

  /// Vista de grilla: una columna por escenario para el día y filtro
  /// seleccionados, cada una con sus spans ya calculados.
  pub fn timetable_columns(&self) -> Vec<(StageId, Vec<StageEntry<'_>>)> {
    let day_artists = self.grid.for_day(
      self.schedule.artists(),
      self.state.timetable.day,
      self.state.timetable.watch.watch_only(),
    );

    self.stages.iter().map(|stage| (*stage, self.grid.column(&day_artists, *stage))).collect()
  }
}
