//! Selection manager.

use std::collections::HashSet;

use log::debug;
use log::trace;

use super::SelectionSet;
use crate::model::Identified;

/// Summary of one [`SelectionManager::on_page_loaded`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Already selected records whose stored copy was replaced.
    pub refreshed: usize,
    /// Records newly selected to satisfy a pending auto-select.
    pub auto_selected: usize,
}

/// Owns the selection across pages and the pending auto-select remainder.
///
/// Pages are only borrowed for the duration of a call; the manager keeps
/// copies of the selected records and nothing else.
///
/// # Example
///
/// ```
/// use artic_lib::model::Artwork;
/// use artic_lib::selection::SelectionManager;
///
/// let page_one: Vec<Artwork> = (1..=5).map(|id| Artwork::new(id, "")).collect();
/// let page_two: Vec<Artwork> = (6..=10).map(|id| Artwork::new(id, "")).collect();
///
/// let mut selection = SelectionManager::new();
/// selection.request_auto_select(8, &page_one);
/// assert_eq!(selection.pending_auto_select(), 3);
///
/// selection.on_page_loaded(&page_two);
/// assert_eq!(selection.len(), 8);
/// assert!(selection.is_selected(&8));
/// assert!(!selection.is_selected(&9));
/// ```
#[derive(Debug, Clone)]
pub struct SelectionManager<R: Identified> {
    selected: SelectionSet<R>,
    pending_auto_select: usize,
}

impl<R: Identified + Clone> Default for SelectionManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Identified + Clone> SelectionManager<R> {
    /// Creates a manager with nothing selected and nothing pending.
    pub fn new() -> Self {
        Self {
            selected: SelectionSet::new(),
            pending_auto_select: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Reconciliation
    // -------------------------------------------------------------------------

    /// Reconciles a freshly loaded page.
    ///
    /// Refreshes the stored copy of every selected record on the page, then
    /// spends any pending auto-select count on the page's unselected records in
    /// page order. Whatever is left stays pending for the next page.
    pub fn on_page_loaded(&mut self, page: &[R]) -> Reconciliation {
        let mut outcome = Reconciliation::default();

        for record in page {
            if self.selected.refresh(record) {
                outcome.refreshed += 1;
            }
        }

        if self.pending_auto_select > 0 {
            for record in page {
                if self.pending_auto_select == 0 {
                    break;
                }
                if self.selected.contains(&record.id()) {
                    continue;
                }
                trace!("Auto-selecting {:?}", record.id());
                self.selected.insert(record.clone());
                self.pending_auto_select -= 1;
                outcome.auto_selected += 1;
            }
        }

        debug!(
            "Page of {} reconciled: {} refreshed, {} auto-selected, {} pending",
            page.len(),
            outcome.refreshed,
            outcome.auto_selected,
            self.pending_auto_select
        );
        outcome
    }

    /// Returns the records of `page` that are selected, in page order.
    pub fn selection_for_page<'p>(&self, page: &'p [R]) -> Vec<&'p R> {
        page.iter()
            .filter(|record| self.selected.contains(&record.id()))
            .collect()
    }

    /// Applies a user edit made while `page` is visible.
    ///
    /// Records on `page` that are not in `selected_on_page` are deselected, and
    /// every record in `selected_on_page` is selected with its given value.
    /// Records that are not on `page` keep their state.
    pub fn on_user_selection_change(&mut self, page: &[R], selected_on_page: &[R]) {
        let keep: HashSet<R::Id> = selected_on_page.iter().map(Identified::id).collect();

        for record in page {
            let id = record.id();
            if !keep.contains(&id) && self.selected.remove(&id).is_some() {
                trace!("Deselected {:?}", id);
            }
        }

        for record in selected_on_page {
            self.selected.insert(record.clone());
        }
    }

    /// Flips the selection state of a single record.
    ///
    /// Returns `true` if the record is selected afterwards.
    pub fn toggle(&mut self, record: &R) -> bool {
        let id = record.id();
        if self.selected.remove(&id).is_some() {
            false
        } else {
            self.selected.insert(record.clone());
            true
        }
    }

    /// Selects up to `count` records, starting with the current page.
    ///
    /// Unselected records on `current_page` are selected in order until `count`
    /// is spent. The unspent remainder replaces any earlier pending count and is
    /// applied by later [`on_page_loaded`](Self::on_page_loaded) calls. A count
    /// of zero does nothing.
    ///
    /// Returns the number of records selected on `current_page`.
    pub fn request_auto_select(&mut self, count: usize, current_page: &[R]) -> usize {
        if count == 0 {
            return 0;
        }

        let mut remaining = count;
        for record in current_page {
            if remaining == 0 {
                break;
            }
            if self.selected.contains(&record.id()) {
                continue;
            }
            self.selected.insert(record.clone());
            remaining -= 1;
        }

        let selected_now = count - remaining;
        if self.pending_auto_select > 0 {
            debug!(
                "Auto-select of {} replaces {} still pending",
                count, self.pending_auto_select
            );
        }
        self.pending_auto_select = remaining;
        debug!(
            "Auto-select of {}: {} on this page, {} pending",
            count, selected_now, remaining
        );
        selected_now
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Returns `true` if the id is selected.
    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selected.contains(id)
    }

    /// Returns the full selection set.
    pub fn selection(&self) -> &SelectionSet<R> {
        &self.selected
    }

    /// Returns the number of selected records across all pages.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns how many more records will be selected as pages load.
    pub fn pending_auto_select(&self) -> usize {
        self.pending_auto_select
    }

    /// Deselects everything and drops any pending remainder.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.pending_auto_select = 0;
    }
}
