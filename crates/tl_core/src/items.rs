//! # Item Classification
//!
//! The engine needs exactly one fact about an item: whether it is a
//! completed ("full") item rather than a basic component. Item taxonomy is
//! owned by an external metadata collaborator; this module only defines the
//! seam and a set-backed implementation fed with caller-supplied ids.

use std::collections::HashSet;

/// Classifies item ids. Implemented by whatever item-metadata source the
/// caller has; the engine consumes only the boolean.
pub trait ItemCatalog {
    fn is_completed_item(&self, item_id: u32) -> bool;
}

/// An [`ItemCatalog`] backed by an explicit set of completed-item ids.
/// With an empty set every purchase classifies as a component, which makes
/// `firstFullItemMin` report null rather than a wrong guess.
#[derive(Debug, Clone, Default)]
pub struct SetItemCatalog {
    completed: HashSet<u32>,
}

impl SetItemCatalog {
    pub fn new(completed: impl IntoIterator<Item = u32>) -> Self {
        Self {
            completed: completed.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

impl ItemCatalog for SetItemCatalog {
    fn is_completed_item(&self, item_id: u32) -> bool {
        self.completed.contains(&item_id)
    }
}
