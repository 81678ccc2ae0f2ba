//! Canonical selection state for the friend grid.
//!
//! [`SelectionStore`] is the sole owner and sole writer of the selected-ID
//! set and its anchor. Everything else (drag controller, keyboard
//! shortcuts, card clicks, the visual overlay) either reads it or goes
//! through its operations. One store instance lives in `AppState` for the
//! lifetime of the view.
//!
//! Invariant: the anchor is a member of the selected set whenever the set
//! is non-empty, and `None` exactly when the set is empty. All operations
//! are total and synchronous; none can fail.

use beacon::Friend;
use std::collections::{BTreeSet, HashMap};

/// How a range extension combines with the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// The computed interval becomes the selection.
    Replace,
    /// The computed interval is unioned into the selection.
    Add,
}

/// Owner of the canonical selection state.
///
/// Responsibilities:
/// - Maintaining the selected-ID set and anchor invariant
/// - Resolving range ("shift-extend") selections against the visible list
/// - Pruning the selection when the visible list changes
/// - Notifying the registered observer on non-silent mutations
pub struct SelectionStore {
    /// Selected entry IDs. Ordered container so fallback anchor derivation
    /// is deterministic.
    selected: BTreeSet<String>,
    /// Anchor entry ID; member of `selected` whenever non-empty.
    anchor: Option<String>,
    /// Observer fired on every non-silent mutation (overlay resync).
    on_change: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected", &self.selected)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
            anchor: None,
            on_change: None,
        }
    }

    // ===== Queries =====

    /// The selected entry IDs.
    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Whether an entry is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected entries.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The current anchor, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    // ===== Observer =====

    /// Registers the single change observer. Passing `None` detaches it.
    pub fn set_on_change(&mut self, handler: Option<Box<dyn FnMut()>>) {
        self.on_change = handler;
    }

    fn notify(&mut self, silent: bool) {
        if silent {
            return;
        }
        if let Some(handler) = self.on_change.as_mut() {
            handler();
        }
    }

    // ===== Mutations =====

    /// Replaces the selection.
    ///
    /// The anchor becomes `anchor_hint` when the hint is a member of the new
    /// set; otherwise the first ID of `next` (in the order supplied).
    /// An empty `next` clears the anchor. Observers are notified unless
    /// `silent`.
    pub fn set_selection<I>(&mut self, next: I, anchor_hint: Option<&str>, silent: bool)
    where
        I: IntoIterator<Item = String>,
    {
        let ordered: Vec<String> = next.into_iter().collect();
        let first = ordered.first().cloned();
        self.selected = ordered.into_iter().collect();

        if self.selected.is_empty() {
            self.anchor = None;
        } else if let Some(hint) = anchor_hint.filter(|h| self.selected.contains(*h)) {
            self.anchor = Some(hint.to_string());
        } else {
            self.anchor = first
                .filter(|f| self.selected.contains(f))
                .or_else(|| self.selected.iter().next().cloned());
        }

        self.notify(silent);
    }

    /// Clears the selection. No-op (and no notification) when already empty.
    pub fn clear_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.set_selection(std::iter::empty(), None, false);
    }

    /// Selects exactly one entry, which becomes the anchor.
    pub fn select_single(&mut self, id: &str) {
        self.set_selection(std::iter::once(id.to_string()), Some(id), false);
    }

    /// Flips one entry's membership. A newly selected entry becomes the
    /// anchor; removing an entry keeps the prior anchor when still valid.
    pub fn toggle_selection(&mut self, id: &str) {
        let mut next: Vec<String> = self.selected.iter().cloned().collect();
        let was_selected = self.selected.contains(id);
        if was_selected {
            next.retain(|existing| existing != id);
            let anchor = self.anchor.clone();
            self.set_selection(next, anchor.as_deref(), false);
        } else {
            next.push(id.to_string());
            self.set_selection(next, Some(id), false);
        }
    }

    /// Extends the selection to a contiguous index interval against the
    /// supplied ordered range list.
    ///
    /// The pivot is whichever bounding index of the current selection
    /// (min or max, selected IDs absent from the list ignored) lies closer
    /// to the target, ties favoring the min side. From an empty selection
    /// this degrades to [`Self::select_single`]; a target absent from the
    /// list is a no-op.
    pub fn apply_range_selection(&mut self, id: &str, mode: RangeMode, range_list: &[Friend]) {
        if range_list.is_empty() {
            return;
        }
        let index_by_id: HashMap<&str, usize> = range_list
            .iter()
            .enumerate()
            .map(|(index, friend)| (friend.id.as_str(), index))
            .collect();
        let Some(&target_index) = index_by_id.get(id) else {
            return;
        };

        let selected_indices: Vec<usize> = self
            .selected
            .iter()
            .filter_map(|selected_id| index_by_id.get(selected_id.as_str()).copied())
            .collect();
        let (Some(&min_index), Some(&max_index)) =
            (selected_indices.iter().min(), selected_indices.iter().max())
        else {
            self.select_single(id);
            return;
        };
        let pivot_index = resolve_pivot_index(target_index, min_index, max_index);

        let start = pivot_index.min(target_index);
        let end = pivot_index.max(target_index).min(range_list.len() - 1);
        let range_ids = range_list[start..=end].iter().map(|f| f.id.clone());
        let anchor = range_list[pivot_index].id.clone();

        match mode {
            RangeMode::Add => {
                let mut merged: Vec<String> = self.selected.iter().cloned().collect();
                for range_id in range_ids {
                    if !self.selected.contains(&range_id) {
                        merged.push(range_id);
                    }
                }
                self.set_selection(merged, Some(&anchor), false);
            }
            RangeMode::Replace => {
                self.set_selection(range_ids.collect::<Vec<_>>(), Some(&anchor), false);
            }
        }
    }

    /// Selects every entry of `list`; an empty list clears instead.
    pub fn select_all(&mut self, list: &[Friend]) {
        if list.is_empty() {
            self.clear_selection();
            return;
        }
        let anchor = list[0].id.clone();
        let ids: Vec<String> = list.iter().map(|f| f.id.clone()).collect();
        self.set_selection(ids, Some(&anchor), false);
    }

    /// Intersects the selection with `list`, dropping IDs that are no
    /// longer visible. Must run whenever the visible list changes so a
    /// filtered-out entry cannot stay selected as a ghost.
    pub fn prune_selection(&mut self, list: &[Friend]) {
        let kept: Vec<String> = list
            .iter()
            .filter(|f| self.selected.contains(&f.id))
            .map(|f| f.id.clone())
            .collect();
        let anchor = self.anchor.clone();
        self.set_selection(kept, anchor.as_deref(), false);
    }
}

/// Picks the range pivot: the bounding selected index closest to the
/// target, ties to the min side; a target outside the bounds extends from
/// the far bound.
fn resolve_pivot_index(target_index: usize, min_index: usize, max_index: usize) -> usize {
    if target_index < min_index {
        min_index
    } else if target_index > max_index {
        max_index
    } else {
        let distance_to_min = target_index - min_index;
        let distance_to_max = max_index - target_index;
        if distance_to_min <= distance_to_max {
            min_index
        } else {
            max_index
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn list(n: usize) -> Vec<Friend> {
        (0..n)
            .map(|i| Friend {
                id: format!("usr_{i:02}"),
                display_name: format!("Friend {i}"),
                ..Friend::default()
            })
            .collect()
    }

    fn assert_anchor_invariant(store: &SelectionStore) {
        match store.anchor() {
            Some(anchor) => assert!(store.is_selected(anchor), "anchor must be selected"),
            None => assert!(store.is_empty(), "anchor is None only when empty"),
        }
    }

    #[test]
    fn test_anchor_invariant_across_operations() {
        let friends = list(10);
        let mut store = SelectionStore::new();
        assert_anchor_invariant(&store);

        store.select_single("usr_03");
        assert_anchor_invariant(&store);

        store.toggle_selection("usr_05");
        assert_anchor_invariant(&store);
        assert_eq!(store.anchor(), Some("usr_05"));

        store.toggle_selection("usr_05"); // remove the anchor itself
        assert_anchor_invariant(&store);

        store.select_all(&friends);
        assert_anchor_invariant(&store);
        assert_eq!(store.len(), 10);

        store.clear_selection();
        assert_anchor_invariant(&store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_selection_anchor_hint_rules() {
        let mut store = SelectionStore::new();

        store.set_selection(
            vec!["usr_02".to_string(), "usr_01".to_string()],
            Some("usr_01"),
            false,
        );
        assert_eq!(store.anchor(), Some("usr_01"));

        // Hint outside the set: falls back to the first supplied ID.
        store.set_selection(
            vec!["usr_07".to_string(), "usr_03".to_string()],
            Some("usr_99"),
            false,
        );
        assert_eq!(store.anchor(), Some("usr_07"));

        store.set_selection(std::iter::empty(), Some("usr_07"), false);
        assert_eq!(store.anchor(), None);
    }

    #[test]
    fn test_toggle_keeps_prior_anchor_on_removal() {
        let mut store = SelectionStore::new();
        store.select_single("usr_01");
        store.toggle_selection("usr_02");
        assert_eq!(store.anchor(), Some("usr_02"));

        store.toggle_selection("usr_01");
        assert_eq!(store.anchor(), Some("usr_02"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_range_from_empty_equals_select_single() {
        let friends = list(10);
        let mut store = SelectionStore::new();
        store.apply_range_selection("usr_04", RangeMode::Replace, &friends);
        assert_eq!(store.len(), 1);
        assert!(store.is_selected("usr_04"));
        assert_eq!(store.anchor(), Some("usr_04"));
    }

    #[test]
    fn test_range_replace_scenario() {
        // 10 sorted entries; select index 7, then range-extend to index 2:
        // indices 2..=7 inclusive, 6 entries.
        let friends = list(10);
        let mut store = SelectionStore::new();
        store.select_single("usr_07");
        store.apply_range_selection("usr_02", RangeMode::Replace, &friends);

        assert_eq!(store.len(), 6);
        for i in 2..=7 {
            assert!(store.is_selected(&format!("usr_{i:02}")), "index {i}");
        }
        assert_anchor_invariant(&store);
    }

    #[test]
    fn test_range_add_is_monotonic() {
        let friends = list(10);
        let mut store = SelectionStore::new();
        store.select_single("usr_01");
        store.toggle_selection("usr_08");

        let before: Vec<String> = store.selected().iter().cloned().collect();
        store.apply_range_selection("usr_04", RangeMode::Add, &friends);
        for id in &before {
            assert!(store.is_selected(id), "add mode must keep {id}");
        }
        assert!(store.len() >= before.len());
    }

    #[test]
    fn test_range_pivot_prefers_closest_edge() {
        let friends = list(10);
        let mut store = SelectionStore::new();

        // Selection block [3, 6]; target 7 is nearer to 6 than to 3.
        store.select_single("usr_03");
        store.apply_range_selection("usr_06", RangeMode::Replace, &friends);
        store.apply_range_selection("usr_07", RangeMode::Replace, &friends);
        let ids: Vec<&str> = store.selected().iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["usr_06", "usr_07"]);
    }

    #[test]
    fn test_range_pivot_tie_favors_min_side() {
        let friends = list(10);
        let mut store = SelectionStore::new();

        // Selection block [2, 6]; target 4 is equidistant: pivot = 2.
        store.select_single("usr_02");
        store.apply_range_selection("usr_06", RangeMode::Replace, &friends);
        store.apply_range_selection("usr_04", RangeMode::Replace, &friends);
        let ids: Vec<&str> = store.selected().iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["usr_02", "usr_03", "usr_04"]);
    }

    #[test]
    fn test_range_ignores_selected_ids_absent_from_list() {
        let friends = list(5);
        let mut store = SelectionStore::new();
        store.select_single("usr_02");
        store.toggle_selection("usr_ghost"); // not in the range list

        store.apply_range_selection("usr_04", RangeMode::Replace, &friends);
        let ids: Vec<&str> = store.selected().iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["usr_02", "usr_03", "usr_04"]);
    }

    #[test]
    fn test_range_unknown_target_is_a_noop() {
        let friends = list(5);
        let mut store = SelectionStore::new();
        store.select_single("usr_02");
        store.apply_range_selection("usr_99", RangeMode::Replace, &friends);
        assert_eq!(store.len(), 1);
        assert!(store.is_selected("usr_02"));
    }

    #[test]
    fn test_prune_is_subset_of_list() {
        let friends = list(10);
        let mut store = SelectionStore::new();
        store.select_all(&friends);

        let narrowed: Vec<Friend> = friends[2..5].to_vec();
        store.prune_selection(&narrowed);

        assert_eq!(store.len(), 3);
        for f in &narrowed {
            assert!(store.is_selected(&f.id));
        }
        assert_anchor_invariant(&store);
    }

    #[test]
    fn test_prune_removes_exactly_the_missing_id() {
        let friends = list(4);
        let mut store = SelectionStore::new();
        store.select_all(&friends);

        let without_second: Vec<Friend> = friends
            .iter()
            .filter(|f| f.id != "usr_01")
            .cloned()
            .collect();
        store.prune_selection(&without_second);

        assert!(!store.is_selected("usr_01"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_prune_to_nothing_clears_anchor() {
        let friends = list(3);
        let mut store = SelectionStore::new();
        store.select_all(&friends);
        store.prune_selection(&[]);
        assert!(store.is_empty());
        assert_eq!(store.anchor(), None);
    }

    #[test]
    fn test_select_all_empty_list_clears() {
        let friends = list(3);
        let mut store = SelectionStore::new();
        store.select_all(&friends);
        store.select_all(&[]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_silent_mutations_do_not_notify() {
        let mut store = SelectionStore::new();
        let notified = Rc::new(Cell::new(0u32));
        let observer = Rc::clone(&notified);
        store.set_on_change(Some(Box::new(move || {
            observer.set(observer.get() + 1);
        })));

        store.set_selection(vec!["usr_01".to_string()], None, true);
        assert_eq!(notified.get(), 0);

        store.set_selection(vec!["usr_02".to_string()], None, false);
        assert_eq!(notified.get(), 1);

        // clear on an empty store stays quiet
        store.clear_selection();
        assert_eq!(notified.get(), 2);
        store.clear_selection();
        assert_eq!(notified.get(), 2);
    }
}
