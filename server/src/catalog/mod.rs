//! Catalog client — HTTP adapter over the remote product catalog.
//!
//! DESIGN
//! ======
//! `HttpCatalog` implements the shared `CatalogSource` seam with `reqwest`.
//! Response bodies are read as text and handed to the validating decoders in
//! the `products` crate, so the wire shape is never trusted implicitly.
//! Listing responses are cached per limit with no invalidation; item lookups
//! always go to the catalog. No retries and no timeouts: failures propagate
//! straight to the caller.

pub mod cache;

use async_trait::async_trait;
use products::{
    CatalogError, CatalogSource, Product, check_item_status, check_status, decode_product, decode_product_list,
    product_url, products_url,
};

use crate::config::ServerConfig;
use cache::ListingCache;

pub struct HttpCatalog {
    http: reqwest::Client,
    base_url: String,
    listings: Option<ListingCache>,
}

impl HttpCatalog {
    /// Build a catalog client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, cache_listings: bool) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            listings: cache_listings.then(ListingCache::default),
        })
    }

    /// Build a catalog client from parsed server config.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CatalogError> {
        Self::new(&config.catalog_base_url, config.cache_listings)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_text(&self, url: &str) -> Result<(u16, String), CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        tracing::debug!(%url, status, bytes = body.len(), "catalog response");
        Ok((status, body))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_products(&self, limit: usize) -> Result<Vec<Product>, CatalogError> {
        if let Some(cached) = self.cached_listing(limit).await {
            tracing::debug!(limit, "listing cache hit");
            return Ok(cached);
        }

        let url = products_url(&self.base_url, limit);
        match self.fetch_listing(&url, limit).await {
            Ok(products) => {
                if let Some(cache) = &self.listings {
                    if cache.insert(limit, products.clone()).await {
                        let entries = cache.entry_count().await;
                        tracing::debug!(limit, entries, "listing cached");
                    } else {
                        tracing::debug!(limit, "listing cache full; not cached");
                    }
                }
                Ok(products)
            }
            Err(e) => {
                tracing::warn!(%url, code = e.error_code(), error = %e, "catalog listing failed");
                Err(e)
            }
        }
    }

    async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        let url = product_url(&self.base_url, id);
        let result = self.fetch_item(&url, id).await;

        if let Err(e) = &result {
            if e.is_not_found() {
                tracing::debug!(%url, "catalog has no such product");
            } else {
                tracing::warn!(%url, code = e.error_code(), error = %e, "catalog lookup failed");
            }
        }
        result
    }
}

impl HttpCatalog {
    async fn cached_listing(&self, limit: usize) -> Option<Vec<Product>> {
        match &self.listings {
            Some(cache) => cache.get(limit).await,
            None => None,
        }
    }

    async fn fetch_listing(&self, url: &str, limit: usize) -> Result<Vec<Product>, CatalogError> {
        let (status, body) = self.fetch_text(url).await?;
        check_status(status)?;
        decode_product_list(&body, limit)
    }

    async fn fetch_item(&self, url: &str, id: &str) -> Result<Product, CatalogError> {
        let (status, body) = self.fetch_text(url).await?;
        check_item_status(status, id)?;
        decode_product(&body, id)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
