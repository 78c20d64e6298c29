//! Favorite store port and its implementations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail page never touches `localStorage` directly. It reads and writes
//! through a `FavoriteStore` provided as Leptos context, so tests swap in
//! `MemoryFavorites`. The slot holds a JSON array of integers; anything else
//! in it reads as "no favorites yet".

use std::sync::{Arc, Mutex, PoisonError};

/// Name of the persisted slot.
pub const FAVORITES_SLOT: &str = "favorites";

/// Errors from persisting favorites. Reads never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("favorites could not be encoded: {0}")]
    Encode(String),

    #[error("local storage write failed: {0}")]
    Write(String),
}

/// Key/value persistence for the favorite set.
pub trait FavoriteStore: Send + Sync {
    /// Stored identifiers; empty when the slot is absent, corrupt, or unreachable.
    fn read(&self) -> Vec<u64>;

    /// Replace the stored identifiers wholesale.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be written.
    fn write(&self, ids: &[u64]) -> Result<(), StorageError>;
}

/// Store handle provided through Leptos context.
pub type SharedFavoriteStore = Arc<dyn FavoriteStore>;

/// Decode a raw slot value, falling back to empty.
pub fn decode_ids(raw: Option<&str>) -> Vec<u64> {
    raw.and_then(|value| serde_json::from_str::<Vec<u64>>(value).ok())
        .unwrap_or_default()
}

/// Encode identifiers as a JSON array.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode_ids(ids: &[u64]) -> Result<String, StorageError> {
    serde_json::to_string(ids).map_err(|e| StorageError::Encode(e.to_string()))
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// Browser `localStorage` backed store. Outside the browser it reads empty
/// and refuses writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageFavorites;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FavoriteStore for LocalStorageFavorites {
    fn read(&self) -> Vec<u64> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage().and_then(|storage| storage.get_item(FAVORITES_SLOT).ok().flatten());
            decode_ids(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Vec::new()
        }
    }

    fn write(&self, ids: &[u64]) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            let raw = encode_ids(ids)?;
            storage
                .set_item(FAVORITES_SLOT, &raw)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ids;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// In-memory store holding the raw slot text, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryFavorites {
    slot: Mutex<Option<String>>,
    reject_writes: bool,
}

impl MemoryFavorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with arbitrary text, valid or not.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self { slot: Mutex::new(Some(raw.to_owned())), reject_writes: false }
    }

    /// A store whose writes always fail, like a full or disabled `localStorage`.
    #[must_use]
    pub fn rejecting_writes() -> Self {
        Self { slot: Mutex::new(None), reject_writes: true }
    }

    /// Current raw slot contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl FavoriteStore for MemoryFavorites {
    fn read(&self) -> Vec<u64> {
        decode_ids(self.raw().as_deref())
    }

    fn write(&self, ids: &[u64]) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write("quota exceeded".into()));
        }
        let raw = encode_ids(ids)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
#[path = "favorite_store_test.rs"]
mod favorite_store_test;
