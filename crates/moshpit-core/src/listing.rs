use crate::domain::{Artist, WantLevel};

/// Predicados seleccionables de la vista de lista.
///
/// `want_levels` es un conjunto de niveles toggleados de forma
/// independiente; vacío significa "sin filtro de nivel", no "no matchear
/// nada". `query` vacío matchea todo.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
  pub query: String,
  pub want_levels: Vec<WantLevel>,
  pub watch_only: bool,
}

impl ListFilter {
  /// Agrega o quita un nivel del filtro.
  pub fn toggle_want_level(&mut self, level: WantLevel) {
    if let Some(pos) = self.want_levels.iter().position(|l| *l == level) {
      self.want_levels.remove(pos);
    } else {
      self.want_levels.push(level);
    }
  }

  /// `query` ya viene en minúsculas; se baja una sola vez por pipeline.
  fn matches(&self, artist: &Artist, query: &str) -> bool {
    let name_match = artist.name.to_lowercase().contains(query);
    let memo_match = artist.memo.to_lowercase().contains(query);
    let level_match = self.want_levels.is_empty() || self.want_levels.contains(&artist.want_level);
    let watch_match = !self.watch_only || artist.watch;

    (name_match || memo_match) && level_match && watch_match
  }
}

/// Orden del listado según el nivel "Want to See".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
  Asc,
  #[default]
  Desc,
}

impl SortOrder {
  pub fn toggled(self) -> Self {
    match self {
      SortOrder::Asc => SortOrder::Desc,
      SortOrder::Desc => SortOrder::Asc,
    }
  }
}

/// Subconjunto visible de la lista: filtra con el predicado compuesto y
/// ordena por nivel según `order`, con desempate SIEMPRE ascendente por
/// nombre (independiente del orden elegido). El sort es estable y total.
pub fn visible(artists: &[Artist], filter: &ListFilter, order: SortOrder) -> Vec<Artist> {
  let query = filter.query.to_lowercase();
  let mut result: Vec<Artist> =
    artists.iter().filter(|a| filter.matches(a, &query)).cloned().collect();

  result.sort_by(|a, b| {
    let by_level = match order {
      SortOrder::Asc => a.want_level.cmp(&b.want_level),
      SortOrder::Desc => b.want_level.cmp(&a.want_level),
    };
    by_level.then_with(|| a.name.cmp(&b.name))
  });

  result
}
