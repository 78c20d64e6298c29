//! Catalog access helpers for pages.
//!
//! Server-side (SSR): reads through the `SharedCatalog` the host provides as
//! Leptos context, so the listing resolves before the HTML is sent.
//! Client-side (hydrate): calls the host's `/api/products` proxy via
//! `gloo-net` and decodes with the same validating decoders the host uses.
//!
//! Every helper returns a `Send` future so pages can feed it to a
//! serializable `Resource`. The browser request itself is not `Send`; it runs
//! on the local executor and hands its result back over a oneshot channel.

use products::{CatalogError, Product};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Prefix of the host's catalog proxy.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(limit: usize) -> String {
    products::products_url(API_BASE, limit)
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: &str) -> String {
    products::product_url(API_BASE, id)
}

#[cfg(any(test, not(feature = "hydrate")))]
fn no_catalog() -> CatalogError {
    CatalogError::Unavailable("no catalog configured for this renderer".to_owned())
}

/// Fetch at most `limit` products for the listing.
pub fn list_products(limit: usize) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send + 'static {
    #[cfg(feature = "hydrate")]
    {
        on_local_executor(async move {
            let url = products_endpoint(limit);
            let (status, body) = get_text(&url).await?;
            products::check_status(status)?;
            products::decode_product_list(&body, limit)
        })
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let catalog = leptos::prelude::use_context::<products::SharedCatalog>();
        async move {
            match catalog {
                Some(catalog) => catalog.list_products(limit).await,
                None => Err(no_catalog()),
            }
        }
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        let _ = limit;
        std::future::ready(Err(no_catalog()))
    }
}

/// Fetch one product by its raw route segment.
pub fn get_product(id: String) -> impl Future<Output = Result<Product, CatalogError>> + Send + 'static {
    #[cfg(feature = "hydrate")]
    {
        on_local_executor(async move {
            let url = product_endpoint(&id);
            let (status, body) = get_text(&url).await?;
            products::check_item_status(status, &id)?;
            products::decode_product(&body, &id)
        })
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let catalog = leptos::prelude::use_context::<products::SharedCatalog>();
        async move {
            match catalog {
                Some(catalog) => catalog.get_product(&id).await,
                None => Err(no_catalog()),
            }
        }
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        let _ = id;
        std::future::ready(Err(no_catalog()))
    }
}

#[cfg(feature = "hydrate")]
fn on_local_executor<T, F>(request: F) -> impl Future<Output = Result<T, CatalogError>> + Send + 'static
where
    T: Send + 'static,
    F: Future<Output = Result<T, CatalogError>> + 'static,
{
    let (tx, rx) = futures::channel::oneshot::channel();
    leptos::task::spawn_local(async move {
        let _ = tx.send(request.await);
    });
    async move {
        rx.await
            .unwrap_or_else(|_| Err(CatalogError::Transport("request dropped".to_owned())))
    }
}

#[cfg(feature = "hydrate")]
async fn get_text(url: &str) -> Result<(u16, String), CatalogError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;
    Ok((status, body))
}
