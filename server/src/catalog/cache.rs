//! In-memory listing cache.
//!
//! Entries are keyed by the requested limit and never expire. Staleness is
//! acceptable for a showcase: the catalog is read-only from our side. The
//! number of distinct limits held is capped; once full, listings for new
//! limits are served uncached.

use std::collections::HashMap;

use products::Product;
use tokio::sync::RwLock;

/// Most distinct limits kept at once.
pub const MAX_CACHED_LISTINGS: usize = 8;

#[derive(Default)]
pub struct ListingCache {
    entries: RwLock<HashMap<usize, Vec<Product>>>,
}

impl ListingCache {
    pub async fn get(&self, limit: usize) -> Option<Vec<Product>> {
        self.entries.read().await.get(&limit).cloned()
    }

    /// Store a listing. Returns `false` when the cache is full and `limit` is
    /// not already present.
    pub async fn insert(&self, limit: usize, products: Vec<Product>) -> bool {
        let mut entries = self.entries.write().await;
        if entries.len() >= MAX_CACHED_LISTINGS && !entries.contains_key(&limit) {
            return false;
        }
        entries.insert(limit, products);
        true
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
