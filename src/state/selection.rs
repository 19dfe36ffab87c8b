/// Cross-page row selection engine
///
/// This is the heart of the application. It owns the set of globally
/// selected artwork ids (across every page the user has visited) and an
/// optional bulk target ("select the first N rows"), and keeps both
/// consistent as the user toggles rows and as new pages arrive.

use std::collections::HashSet;

use thiserror::Error;

/// A bulk target that cannot be accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested count was zero (or the input wasn't a positive number)
    #[error("Enter a valid number greater than 0")]
    NotPositive,
    /// The requested count exceeds the catalogue size
    #[error("Max available is {max}")]
    ExceedsTotal { max: usize },
}

/// Owns the global selection state for the table.
///
/// One instance lives for the lifetime of the table view and is passed
/// by reference wherever it is needed; it is never a global.
///
/// Key invariant: the set only ever contains ids that appeared in a
/// fetched page, because every mutation walks actual page ids.
#[derive(Debug, Default)]
pub struct SelectionEngine {
    /// Ids selected across all pages ever visited
    selected: HashSet<i64>,
    /// Pending "select first N" target; None when no fill is in progress
    bulk_target: Option<usize>,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change on the current page.
    ///
    /// `page_ids` are the ids of the rows currently displayed, in page
    /// order; `checked` is the full intended checked set for that page
    /// (the UI collapses header and per-row toggles into one event).
    /// Rows on other pages are never touched, which is what makes
    /// selections accumulate across navigation.
    ///
    /// Manual toggling cancels any pending bulk fill, so the auto-fill
    /// never fights the user's intent.
    pub fn toggle_rows_on_page(&mut self, page_ids: &[i64], checked: &HashSet<i64>) {
        for &id in page_ids {
            if checked.contains(&id) {
                self.selected.insert(id);
            } else {
                self.selected.remove(&id);
            }
        }
        self.bulk_target = None;
    }

    /// Declare a "select first N rows" target.
    ///
    /// Rejects `n < 1` and `n > total_records` without changing any
    /// state. On success the selection is reset to empty and the target
    /// armed: declaring a target is a restart, not a merge with
    /// whatever was selected before.
    pub fn declare_bulk_target(
        &mut self,
        n: usize,
        total_records: usize,
    ) -> Result<(), ValidationError> {
        if n < 1 {
            return Err(ValidationError::NotPositive);
        }
        if n > total_records {
            return Err(ValidationError::ExceedsTotal { max: total_records });
        }

        self.selected.clear();
        self.bulk_target = Some(n);
        Ok(())
    }

    /// Grow the selection toward a pending bulk target from a freshly
    /// loaded page.
    ///
    /// Walks `page_ids` in page order, skips ids that are already
    /// selected, and adds at most `target - selected` new ids. Does
    /// nothing when no target is pending or the target is already met,
    /// so growth stops automatically once filled. Idempotent: a second
    /// call with the same ids and unchanged state adds nothing.
    pub fn reconcile_on_page_load(&mut self, page_ids: &[i64]) {
        let Some(target) = self.bulk_target else {
            return;
        };
        if self.selected.len() >= target {
            return;
        }

        let mut needed = target - self.selected.len();
        for &id in page_ids {
            if needed == 0 {
                break;
            }
            if self.selected.insert(id) {
                needed -= 1;
            }
        }
    }

    /// Drop every selection and any pending bulk target.
    pub fn clear_all(&mut self) {
        self.selected.clear();
        self.bulk_target = None;
    }

    /// The subset of `page_ids` that is currently selected.
    /// Pure read; drives checkbox rendering.
    pub fn selection_on_page(&self, page_ids: &[i64]) -> HashSet<i64> {
        page_ids
            .iter()
            .copied()
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn bulk_target(&self) -> Option<usize> {
        self.bulk_target
    }

    /// `(selected, target)` while a bulk fill is still in progress,
    /// None once met or when no target is pending. Drives the
    /// "filling x/y" progress note.
    pub fn bulk_progress(&self) -> Option<(usize, usize)> {
        match self.bulk_target {
            Some(target) if self.selected.len() < target => {
                Some((self.selected.len(), target))
            }
            _ => None,
        }
    }
}
