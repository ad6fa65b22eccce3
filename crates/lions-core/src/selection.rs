//! Filter and focus state.
//!
//! [`SelectionState`] is the only mutable piece of a story page: the active
//! category filter plus the single focused entry. The visible subset is a pure
//! function of (store, selection) and never reorders the underlying data.

use crate::store::ContentStore;
use crate::types::{Category, EntryId, GeoPoint};

/// What re-selecting the already-active category does.
///
/// The source pages are split on this, so it is an explicit per-story choice
/// rather than a shared invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatSelect {
    /// Re-selecting toggles the filter back off
    #[default]
    Clears,
    /// Re-selecting is a no-op
    Keeps,
}

/// In-memory, user-driven selection for one story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active_category: Option<Category>,
    focused: Option<EntryId>,
    repeat: RepeatSelect,
}

impl SelectionState {
    pub fn new(repeat: RepeatSelect) -> Self {
        Self {
            active_category: None,
            focused: None,
            repeat,
        }
    }

    pub fn active_category(&self) -> Option<Category> {
        self.active_category
    }

    pub fn focused(&self) -> Option<EntryId> {
        self.focused
    }

    /// Replace the active category. `None` always clears the filter;
    /// re-selecting the active category follows the story's [`RepeatSelect`]
    /// policy.
    pub fn select_category(&mut self, category: Option<Category>) {
        match category {
            Some(c) if self.active_category == Some(c) => {
                if self.repeat == RepeatSelect::Clears {
                    self.active_category = None;
                }
            }
            other => self.active_category = other,
        }
    }

    /// Focus `id`, or clear focus if `id` is already focused. At most one
    /// entry is focused at a time.
    pub fn toggle_entry(&mut self, id: EntryId) {
        if self.focused == Some(id) {
            self.focused = None;
        } else {
            self.focused = Some(id);
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// The store's points narrowed to the active category, in store order.
    pub fn visible_entries(&self, store: &ContentStore) -> Vec<&'static GeoPoint> {
        store
            .points()
            .iter()
            .filter(|p| match self.active_category {
                None => true,
                Some(c) => p.category == c,
            })
            .collect()
    }

    /// Resolve the focused id against the store. A focus that no longer
    /// exists in the store resolves to `None` rather than failing.
    pub fn focused_entry(&self, store: &ContentStore) -> Option<&'static GeoPoint> {
        self.focused.and_then(|id| store.get(id))
    }

    /// Drop a focus whose id the store does not hold.
    pub fn clear_stale(&mut self, store: &ContentStore) {
        if let Some(id) = self.focused {
            if store.get(id).is_none() {
                tracing::warn!("Clearing stale focus: {}", id);
                self.focused = None;
            }
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(RepeatSelect::default())
    }
}
