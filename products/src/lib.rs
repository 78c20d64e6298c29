//! Shared product model and catalog codec.
//!
//! This crate owns the product representation used by both `server` and
//! `client`. Catalog JSON is never trusted as-is: bodies decode into raw wire
//! records which are validated into [`Product`] before anything renders them.

mod error;
mod source;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use error::CatalogError;
pub use source::{CatalogSource, SharedCatalog};

/// Number of products shown on the listing page.
pub const LISTING_LIMIT: usize = 5;

/// Public catalog used when no base URL is configured.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";

/// Highest value `rating.rate` may take.
pub const MAX_RATE: f64 = 5.0;

// =============================================================================
// MODEL
// =============================================================================

/// A catalog product. Read-only: this system never mutates product fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    /// Stable positive identifier; the sole key for routing and favoriting.
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// URL of the product image.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in `0.0..=5.0`.
    pub rate: f64,
    /// Number of reviews behind `rate`.
    pub count: u64,
}

impl Product {
    /// Price as shown to users, e.g. `$109.95`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Route of this product's detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

/// Unvalidated product exactly as the catalog sends it.
#[derive(Deserialize)]
struct RawProduct {
    id: u64,
    title: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    rating: Rating,
}

impl TryFrom<RawProduct> for Product {
    type Error = CatalogError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        if raw.id == 0 {
            return Err(CatalogError::Parse("product id must be positive".into()));
        }
        if raw.title.trim().is_empty() {
            return Err(CatalogError::Parse(format!("product {} has an empty title", raw.id)));
        }
        if !raw.price.is_finite() || raw.price < 0.0 {
            return Err(CatalogError::Parse(format!("product {} has invalid price {}", raw.id, raw.price)));
        }
        if !(0.0..=MAX_RATE).contains(&raw.rating.rate) {
            return Err(CatalogError::Parse(format!(
                "product {} has rating {} outside 0-5",
                raw.id, raw.rating.rate
            )));
        }
        Ok(Self {
            id: raw.id,
            title: raw.title,
            price: raw.price,
            description: raw.description,
            category: raw.category,
            image: raw.image,
            rating: raw.rating,
        })
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Collection endpoint under `base`, e.g. `https://fakestoreapi.com/products?limit=5`.
#[must_use]
pub fn products_url(base: &str, limit: usize) -> String {
    format!("{}/products?limit={limit}", base.trim_end_matches('/'))
}

/// Item endpoint under `base`. The identifier is not validated, only
/// percent-encoded so it stays a single path segment.
#[must_use]
pub fn product_url(base: &str, id: &str) -> String {
    format!("{}/products/{}", base.trim_end_matches('/'), urlencoding::encode(id))
}

// =============================================================================
// DECODING
// =============================================================================

/// Map a collection response status to a result.
///
/// # Errors
///
/// Returns [`CatalogError::Fetch`] for any non-2xx status.
pub fn check_status(status: u16) -> Result<(), CatalogError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(CatalogError::Fetch { status }) }
}

/// Map an item response status to a result. `404` means the catalog has no
/// product with identifier `id`.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] for `404` and [`CatalogError::Fetch`]
/// for any other non-2xx status.
pub fn check_item_status(status: u16, id: &str) -> Result<(), CatalogError> {
    if status == 404 {
        return Err(CatalogError::NotFound(id.to_owned()));
    }
    check_status(status)
}

/// Decode a collection body into at most `limit` validated products.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the body is not an array of valid
/// products or if two products share an identifier.
pub fn decode_product_list(body: &str, limit: usize) -> Result<Vec<Product>, CatalogError> {
    let mut products: Vec<Product> = serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut seen = HashSet::with_capacity(products.len());
    if let Some(dup) = products.iter().find(|p| !seen.insert(p.id)) {
        return Err(CatalogError::Parse(format!("duplicate product id {}", dup.id)));
    }

    products.truncate(limit);
    Ok(products)
}

/// Decode an item body for the requested identifier segment.
///
/// The public catalog answers unknown identifiers with an empty (or `null`)
/// body rather than a `404`, so both are treated as not found.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] for an empty or `null` body and
/// [`CatalogError::Parse`] for an invalid product or one whose `id` differs
/// from a numeric `requested` segment.
pub fn decode_product(body: &str, requested: &str) -> Result<Product, CatalogError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(CatalogError::NotFound(requested.to_owned()));
    }

    let product: Product = serde_json::from_str(trimmed).map_err(|e| CatalogError::Parse(e.to_string()))?;
    if let Ok(expected) = requested.parse::<u64>() {
        if product.id != expected {
            return Err(CatalogError::Parse(format!(
                "requested product {expected} but catalog returned {}",
                product.id
            )));
        }
    }
    Ok(product)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
