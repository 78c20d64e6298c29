//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the catalog proxy API and Leptos SSR rendering under a
//! single Axum router. The listing page resolves its products on the server
//! through the catalog handle provided as Leptos context; the hydrated client
//! reaches the same catalog through `/api/products`.

pub mod products;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use ::products::SharedCatalog;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Catalog proxy routes used by the hydrated client.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: proxy API + Leptos SSR pages + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let catalog = state.catalog.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(catalog.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue, and CSS live under the site root's /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    // Anything that is neither a route nor a site file renders the app's
    // "Page not found." view.
    let not_found = {
        let opts = leptos_options.clone();
        let catalog = state.catalog.clone();
        move |req: Request| render_not_found(opts.clone(), catalog.clone(), req)
    };

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path).not_found_service(not_found.into_service()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn render_not_found(options: LeptosOptions, catalog: SharedCatalog, req: Request) -> Response {
    let handler = render_app_to_stream_with_context(
        move || provide_context(catalog.clone()),
        move || client::app::shell(options.clone()),
    );
    let mut response = handler(req).await.into_response();
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
