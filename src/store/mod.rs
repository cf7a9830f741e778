//! The artwork collection and the active medium filter.
//!
//! The store is the single owner of every [`ArtworkRecord`]. Other
//! components refer to artworks by [`CellId`], the record's position in
//! load order, which is also its render order in the grid.

mod artwork;
mod filter;

use std::path::Path;

pub use artwork::{ArtworkRecord, Caption, Year};
pub use filter::{Filter, ALL};
use rustc_hash::FxHashMap;

use crate::error::GalleryError;

/// Handle of a rendered cell: the artwork's index in load order.
pub type CellId = usize;

/// Direction of a step through the visible artworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Toward the end of the list, wrapping to the first.
    Next,
    /// Toward the start of the list, wrapping to the last.
    Previous,
}

impl Step {
    /// `+1` or `-1`.
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Loaded artworks plus the active filter.
#[derive(Debug, Clone, Default)]
pub struct ArtworkStore {
    artworks: Vec<ArtworkRecord>,
    by_id: FxHashMap<String, CellId>,
    filter: Filter,
}

impl ArtworkStore {
    /// Build a store from records. Records whose id was already seen are
    /// dropped.
    #[must_use]
    pub fn new(records: Vec<ArtworkRecord>) -> Self {
        let mut artworks = Vec::with_capacity(records.len());
        let mut by_id = FxHashMap::default();
        for record in records {
            if by_id.contains_key(&record.id) {
                log::warn!("duplicate artwork id {:?}, keeping the first", record.id);
                continue;
            }
            let _ = by_id.insert(record.id.clone(), artworks.len());
            artworks.push(record);
        }
        Self {
            artworks,
            by_id,
            filter: Filter::All,
        }
    }

    /// Parse a JSON array of artwork records.
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        let records: Vec<ArtworkRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Load the artwork data file from disk.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Download the artwork data file.
    #[cfg(feature = "fetch")]
    pub fn fetch(url: &str) -> Result<Self, GalleryError> {
        let content = ureq::get(url)
            .call()
            .map_err(|e| GalleryError::Fetch(format!("{url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| GalleryError::Fetch(format!("{url}: {e}")))?;
        Self::from_json(&content)
    }

    /// Download the artwork data file.
    #[cfg(not(feature = "fetch"))]
    pub fn fetch(url: &str) -> Result<Self, GalleryError> {
        Err(GalleryError::Fetch(format!(
            "{url}: built without the `fetch` feature"
        )))
    }

    /// Load from a path, or from an `http(s)` URL.
    pub fn load_source(source: &str) -> Result<Self, GalleryError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            return Self::fetch(source);
        }
        Self::load(Path::new(source))
    }

    /// Load data, degrading to an empty collection on any failure.
    ///
    /// The failure is logged and not surfaced: the gallery renders empty.
    #[must_use]
    pub fn load_or_empty(source: &str) -> Self {
        match Self::load_source(source) {
            Ok(store) => {
                log::info!("loaded {} artworks from {source}", store.len());
                store
            }
            Err(e) => {
                log::error!("failed to load artworks from {source}: {e}");
                Self::default()
            }
        }
    }

    /// Number of artworks (and rendered cells).
    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Whether no artworks are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// All artworks in render order.
    #[must_use]
    pub fn artworks(&self) -> &[ArtworkRecord] {
        &self.artworks
    }

    /// Artwork behind a cell handle.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Option<&ArtworkRecord> {
        self.artworks.get(cell)
    }

    /// Cell handle of the artwork with `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<CellId> {
        self.by_id.get(id).copied()
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Replace the active filter. Returns whether it changed.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Whether the cell passes the active filter. Unknown cells do not.
    #[must_use]
    pub fn is_visible(&self, cell: CellId) -> bool {
        self.artworks
            .get(cell)
            .is_some_and(|a| self.filter.matches(a))
    }

    /// Visible cells in render order.
    pub fn visible(&self) -> impl Iterator<Item = CellId> + '_ {
        self.artworks
            .iter()
            .enumerate()
            .filter(|(_, a)| self.filter.matches(a))
            .map(|(i, _)| i)
    }

    /// Distinct mediums in first-appearance order.
    #[must_use]
    pub fn mediums(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for artwork in &self.artworks {
            if !seen.contains(&artwork.medium.as_str()) {
                seen.push(&artwork.medium);
            }
        }
        seen
    }

    /// Everything the filter control offers: `All`, then every medium.
    #[must_use]
    pub fn filter_options(&self) -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(self.mediums().into_iter().map(Filter::from_value))
            .collect()
    }

    /// The visible neighbour of `current`, wrapping around both ends.
    ///
    /// `None` when `current` is not itself visible.
    #[must_use]
    pub fn step_visible(&self, current: CellId, step: Step) -> Option<CellId> {
        let visible: Vec<CellId> = self.visible().collect();
        let index = visible.iter().position(|&c| c == current)?;
        let len = visible.len() as isize;
        let next = (index as isize + step.delta()).rem_euclid(len);
        visible.get(next as usize).copied()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: &str, medium: &str) -> ArtworkRecord {
        ArtworkRecord {
            id: id.into(),
            title: format!("Untitled {id}"),
            year: Year::Number(2020),
            medium: medium.into(),
            image: format!("images/{id}.jpg"),
        }
    }

    fn abc() -> ArtworkStore {
        ArtworkStore::new(vec![
            record("a", "painting"),
            record("x", "drawing"),
            record("b", "painting"),
            record("c", "painting"),
        ])
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let store = ArtworkStore::new(vec![
            record("a", "painting"),
            record("a", "drawing"),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().medium, "painting");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ArtworkStore::from_json("{ not json").is_err());
        assert!(ArtworkStore::from_json(r#"{"id":"a"}"#).is_err());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let store = ArtworkStore::load_or_empty("/nonexistent/artworks.json");
        assert!(store.is_empty());
        assert_eq!(store.filter_options(), vec![Filter::All]);
        assert_eq!(store.step_visible(0, Step::Next), None);
    }

    #[test]
    fn filter_options_in_first_appearance_order() {
        let store = abc();
        assert_eq!(
            store.filter_options(),
            vec![
                Filter::All,
                Filter::Medium("painting".into()),
                Filter::Medium("drawing".into()),
            ]
        );
    }

    #[test]
    fn circular_navigation_over_visible_cells() {
        let mut store = abc();
        assert!(store.set_filter(Filter::from_value("painting")));
        let a = store.index_of("a").unwrap();
        let b = store.index_of("b").unwrap();
        let c = store.index_of("c").unwrap();

        assert_eq!(store.step_visible(b, Step::Next), Some(c));
        assert_eq!(store.step_visible(c, Step::Next), Some(a));
        assert_eq!(store.step_visible(a, Step::Previous), Some(c));
    }

    #[test]
    fn hidden_current_cell_cannot_step() {
        let mut store = abc();
        let _ = store.set_filter(Filter::from_value("painting"));
        let x = store.index_of("x").unwrap();
        assert_eq!(store.step_visible(x, Step::Next), None);
    }

    #[test]
    fn single_visible_cell_wraps_to_itself() {
        let mut store = abc();
        let _ = store.set_filter(Filter::from_value("drawing"));
        let x = store.index_of("x").unwrap();
        assert_eq!(store.step_visible(x, Step::Next), Some(x));
        assert_eq!(store.step_visible(x, Step::Previous), Some(x));
    }

    #[test]
    fn filter_serializes_as_sentinel() {
        assert_eq!(serde_json::to_string(&Filter::All).unwrap(), "\"all\"");
        let f: Filter = serde_json::from_str("\"ink\"").unwrap();
        assert_eq!(f, Filter::Medium("ink".into()));
    }
}
