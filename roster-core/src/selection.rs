//! Checkbox selection used by bulk delete.

use std::collections::BTreeSet;

use crate::ids::UserId;

/// Ids of checked rows. Independent of which page or search result is
/// currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<UserId>,
}

impl Selection {
    /// Whether `id` is checked.
    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }

    /// Flip membership of `id`; returns whether it is now selected.
    pub fn toggle(&mut self, id: &UserId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Returns whether `id` was selected.
    pub fn remove(&mut self, id: &UserId) -> bool {
        self.ids.remove(id)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the whole selection.
    pub fn replace<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = UserId>,
    {
        self.ids = ids.into_iter().collect();
    }

    /// Every id in `ids` is selected.
    pub fn covers<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a UserId>,
    {
        ids.into_iter().all(|id| self.ids.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::default();
        let id = UserId::from("1");
        assert!(selection.toggle(&id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn replace_deduplicates() {
        let mut selection = Selection::default();
        selection.replace(["1", "2", "1"].into_iter().map(UserId::from));
        assert_eq!(selection.len(), 2);
        assert!(selection.covers(&[UserId::from("1"), UserId::from("2")]));
        assert!(!selection.covers(&[UserId::from("3")]));
    }
}
