//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! the same catalog handle is provided to Leptos as context during SSR, so
//! the proxy API and server-rendered pages read through one cache.

use products::SharedCatalog;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}
