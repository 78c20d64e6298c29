//! In-memory favorite set for one detail view.
//!
//! Membership is set-like but insertion order is kept, so the persisted
//! array reads in the order the user favorited products.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<u64>,
}

impl FavoriteSet {
    /// Build a set from stored identifiers, dropping repeats after the first.
    pub fn from_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns `true` if `id` is now a favorite.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.contains(id) {
            self.ids.retain(|existing| *existing != id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;
