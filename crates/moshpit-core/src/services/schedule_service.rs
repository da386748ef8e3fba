use crate::domain::{Artist, ArtistDraft, ArtistId};
use crate::errors::CoreError;
use crate::ports::{KeyValueStore, Notifier};
use crate::services::seed;

/// Clave única bajo la que se persiste la colección completa.
pub const ARTISTS_KEY: &str = "moshpitArtists";

/// Dueño exclusivo de la colección canónica de artistas.
///
/// Las vistas (grilla y lista) reciben snapshots de solo lectura vía
/// [`ScheduleService::artists`] y no guardan estado propio. Toda mutación
/// entra por [`ScheduleService::save`], que valida antes de tocar la
/// colección y persiste el blob completo en cada escritura (no hay
/// persistencia incremental).
pub struct ScheduleService<K, N>
where
  K: KeyValueStore,
  N: Notifier,
{
  store: K,
  notifier: N,
  artists: Vec<Artist>,
}

impl<K, N> ScheduleService<K, N>
where
  K: KeyValueStore,
  N: Notifier,
{
  pub fn new(store: K, notifier: N) -> Self {
    Self { store, notifier, artists: Vec::new() }
  }

  /// Carga la colección persistida o instala el seed inicial.
  ///
  /// Clave ausente o colección vacía → seed de ejemplo, persistido una vez.
  /// Estado no vacío existente queda intacto (bootstrap, no merge). Un blob
  /// corrupto se reporta como `Storage`: re-seedear pisaría datos del
  /// usuario.
  pub fn bootstrap(&mut self) -> Result<(), CoreError> {
    let stored = self.store.get(ARTISTS_KEY).map_err(|e| CoreError::Storage(e.to_string()))?;

    let loaded: Vec<Artist> = match stored {
      Some(blob) => {
        serde_json::from_str(&blob).map_err(|e| CoreError::Storage(format!("decode artists: {e}")))?
      }
      None => Vec::new(),
    };

    if loaded.is_empty() {
      self.artists = seed::initial_artists();
      self.persist()?;
    } else {
      self.artists = loaded;
    }

    Ok(())
  }

  // -------- COMANDO (escritura) --------

  /// Guarda un draft del formulario.
  ///
  /// - Valida el nivel "Want to See"; un draft sin nivel falla con
  ///   `Validation` y no toca ni la colección ni el store (el mensaje va
  ///   inline en el formulario, sin snackbar).
  /// - `id` existente → reemplazo en su lugar; si no, se acuña un id fresco
  ///   y el registro se agrega al final.
  /// - Persiste la colección completa como un único blob. Si la escritura
  ///   falla se notifica y se propaga `Storage`; la colección en memoria
  ///   queda como se intentó (sin rollback).
  ///
  /// Async solo en la forma de la API: el trabajo es síncrono, pero el
  /// caller puede mostrar un spinner mientras espera. Una vez invocado
  /// corre hasta completarse; no hay cancelación.
  pub async fn save(&mut self, draft: ArtistDraft) -> Result<ArtistId, CoreError> {
    let Some(level) = draft.want.level() else {
      return Err(CoreError::Validation("\"Want to See\" level is required.".into()));
    };

    let existing = draft.id.and_then(|id| self.artists.iter().position(|a| a.id == id));

    let id = match (draft.id, existing) {
      (Some(id), Some(_)) => id,
      _ => ArtistId::new(),
    };

    let artist = Artist {
      id,
      name: draft.name,
      want_level: level,
      watch: draft.watch,
      memo: draft.memo,
      day: draft.day,
      stage: draft.stage,
      start_time: draft.start_time,
      end_time: draft.end_time,
    };

    let name = artist.name.clone();

    match existing {
      Some(index) => self.artists[index] = artist,
      None => self.artists.push(artist),
    }

    if let Err(e) = self.persist() {
      self.notifier.save_failed("Save failed. Please try again.").await;
      return Err(e);
    }

    self.notifier.saved(&name).await;
    Ok(id)
  }

  // -------- CONSULTA (lectura) --------

  /// Snapshot de solo lectura de la colección, en orden de inserción (el
  /// orden no tiene semántica: cada vista re-filtra y re-ordena aparte).
  pub fn artists(&self) -> &[Artist] {
    &self.artists
  }

  pub fn find(&self, id: ArtistId) -> Option<&Artist> {
    self.artists.iter().find(|a| a.id == id)
  }

  fn persist(&self) -> Result<(), CoreError> {
    let blob =
      serde_json::to_string(&self.artists).map_err(|e| CoreError::Storage(e.to_string()))?;
    self.store.set(ARTISTS_KEY, &blob).map_err(|e| CoreError::Storage(e.to_string()))
  }
}
