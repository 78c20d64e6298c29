//! Catalog error taxonomy shared by the server and the hydrated client.

use serde::{Deserialize, Serialize};

/// Errors produced while fetching or decoding catalog data.
///
/// Serializable so a failed server-rendered resource can be replayed into the
/// hydrated client unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no product with this identifier.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog responded with status {status}")]
    Fetch { status: u16 },

    /// The response body could not be decoded into products.
    #[error("catalog response could not be decoded: {0}")]
    Parse(String),

    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Transport(String),

    /// No catalog is reachable from this environment.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::Fetch { .. } => "E_FETCH",
            Self::Parse(_) => "E_PARSE",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Unavailable(_) => "E_UNAVAILABLE",
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
