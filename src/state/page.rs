/// Current page cache
///
/// Holds the records for the page being displayed, the known total
/// record count, and the loading/error status. A generation counter
/// tags every fetch so that a response arriving after the user has
/// navigated elsewhere is discarded instead of overwriting the cache.

use crate::catalogue::client::{CataloguePage, FetchError};
use crate::state::data::Artwork;

/// What happened when a fetch completion was applied to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fresh page stored; the selection engine should reconcile now
    Loaded,
    /// Fetch failed; error recorded, previous records kept
    Failed,
    /// Response belongs to a superseded fetch; nothing was touched
    Stale,
}

/// Records and status for the currently displayed page
#[derive(Debug, Default)]
pub struct PageState {
    records: Vec<Artwork>,
    total_records: usize,
    loading: bool,
    error: Option<String>,
    /// Bumped on every fetch start; completions carrying an older
    /// value are stale
    generation: u64,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch: bump the generation, raise the loading flag,
    /// clear any stale error banner. Returns the generation the
    /// in-flight fetch must carry back on completion.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a fetch completion.
    ///
    /// A completion whose generation no longer matches is from a fetch
    /// the user navigated away from: it must not overwrite the cache
    /// and must not reach the selection engine, so the caller gets
    /// `Stale` and nothing changes (the loading flag stays up for the
    /// newer fetch still in flight).
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<CataloguePage, FetchError>,
    ) -> LoadOutcome {
        if generation != self.generation {
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.records;
                self.total_records = page.total_records;
                self.error = None;
                LoadOutcome::Loaded
            }
            Err(err) => {
                // Keep the previous records and selection intact; the
                // user can retry by navigating again
                self.error = Some(err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Ids of the current page's rows, in page order
    pub fn record_ids(&self) -> Vec<i64> {
        self.records.iter().map(|a| a.id).collect()
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("Artwork {}", id)),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            start_date: None,
            end_date: None,
        }
    }

    fn page(ids: &[i64], total: usize) -> CataloguePage {
        CataloguePage {
            records: ids.iter().map(|&id| artwork(id)).collect(),
            total_records: total,
        }
    }

    #[test]
    fn test_fresh_load_stores_records() {
        let mut state = PageState::new();
        let generation = state.begin_load();
        assert!(state.is_loading());

        let outcome = state.apply(generation, Ok(page(&[1, 2, 3], 40)));
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert!(!state.is_loading());
        assert_eq!(state.record_ids(), vec![1, 2, 3]);
        assert_eq!(state.total_records(), 40);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = PageState::new();
        let first = state.begin_load();

        // User navigates again before the first fetch completes
        let second = state.begin_load();

        let outcome = state.apply(first, Ok(page(&[1, 2, 3], 40)));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(state.records().is_empty());
        // Still waiting on the newer fetch
        assert!(state.is_loading());

        let outcome = state.apply(second, Ok(page(&[13, 14], 40)));
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(state.record_ids(), vec![13, 14]);
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut state = PageState::new();
        let generation = state.begin_load();
        state.apply(generation, Ok(page(&[1, 2], 40)));

        let generation = state.begin_load();
        let outcome = state.apply(
            generation,
            Err(FetchError::Status { status: 503 }),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(state.record_ids(), vec![1, 2]);
        assert_eq!(state.total_records(), 40);
        assert!(state.error().is_some());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = PageState::new();
        let generation = state.begin_load();
        state.apply(generation, Err(FetchError::Request("timed out".into())));
        assert!(state.error().is_some());

        state.dismiss_error();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_begin_load_clears_error() {
        let mut state = PageState::new();
        let generation = state.begin_load();
        state.apply(generation, Err(FetchError::Request("boom".into())));

        state.begin_load();
        assert_eq!(state.error(), None);
        assert!(state.is_loading());
    }
}
