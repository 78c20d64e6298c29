//! Catalog access seam.

use std::sync::Arc;

use crate::{CatalogError, Product};

/// Read-only access to a product catalog.
///
/// The server implements this over HTTP; tests substitute in-memory fakes.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch at most `limit` products from the collection endpoint.
    async fn list_products(&self, limit: usize) -> Result<Vec<Product>, CatalogError>;

    /// Fetch one product. `id` is the raw route segment, passed through unvalidated.
    async fn get_product(&self, id: &str) -> Result<Product, CatalogError>;
}

/// Catalog handle shared through axum state and Leptos context.
pub type SharedCatalog = Arc<dyn CatalogSource>;
