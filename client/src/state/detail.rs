//! Detail view state: two mount-time completions merged into one gate.
//!
//! DESIGN
//! ======
//! A detail view waits on two independent events: the favorites read from the
//! store and the product fetch. Each is recorded as it arrives, in any order.
//! The product fetch alone decides the visible phase; favoriting is only
//! interactive once both have completed and the product loaded.

use products::{CatalogError, Product};

use super::favorites::FavoriteSet;
use crate::util::favorite_store::{FavoriteStore, StorageError};

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

/// Visible phase of the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    Loaded,
    /// The catalog has no product with the requested identifier.
    NotFound,
    /// The catalog could not be reached or answered with something unusable.
    Unavailable,
}

/// Result of the product fetch as seen by the view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductOutcome {
    #[default]
    Pending,
    Loaded(Product),
    NotFound,
    Unavailable(CatalogError),
}

/// What a favorite toggle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Membership after the toggle.
    pub favorite: bool,
    /// Whether the new set reached the store. Failures leave in-memory state as is.
    pub persisted: Result<(), StorageError>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    product: ProductOutcome,
    favorites: Option<FavoriteSet>,
}

impl DetailState {
    #[must_use]
    pub fn phase(&self) -> DetailPhase {
        match self.product {
            ProductOutcome::Pending => DetailPhase::Loading,
            ProductOutcome::Loaded(_) => DetailPhase::Loaded,
            ProductOutcome::NotFound => DetailPhase::NotFound,
            ProductOutcome::Unavailable(_) => DetailPhase::Unavailable,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> &ProductOutcome {
        &self.product
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match &self.product {
            ProductOutcome::Loaded(product) => Some(product),
            _ => None,
        }
    }

    #[must_use]
    pub fn favorites(&self) -> Option<&FavoriteSet> {
        self.favorites.as_ref()
    }

    /// Record the mount-time favorites read. Only the first read counts; later
    /// reads would clobber toggles made since.
    pub fn record_favorites(&mut self, favorites: FavoriteSet) {
        if self.favorites.is_none() {
            self.favorites = Some(favorites);
        }
    }

    /// Record the product fetch completion.
    pub fn record_product(&mut self, result: Result<Product, CatalogError>) {
        self.product = match result {
            Ok(product) => ProductOutcome::Loaded(product),
            Err(err) if err.is_not_found() => ProductOutcome::NotFound,
            Err(err) => ProductOutcome::Unavailable(err),
        };
    }

    /// Both completions arrived and there is a product to favorite.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.favorites.is_some() && self.product().is_some()
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        match (self.product(), &self.favorites) {
            (Some(product), Some(favorites)) => favorites.contains(product.id),
            _ => false,
        }
    }

    /// Flip the loaded product's membership, then persist the whole set.
    ///
    /// The in-memory set changes first and stays changed even if the write
    /// fails. Returns `None` while the view is not interactive.
    pub fn toggle_favorite(&mut self, store: &dyn FavoriteStore) -> Option<ToggleOutcome> {
        let id = self.product()?.id;
        let favorites = self.favorites.as_mut()?;
        let favorite = favorites.toggle(id);
        let persisted = store.write(favorites.ids());
        Some(ToggleOutcome { favorite, persisted })
    }
}
