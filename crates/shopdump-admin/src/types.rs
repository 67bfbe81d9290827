//! Response and result types for the Admin API `products.json` endpoint.
//!
//! Product records are kept as raw [`serde_json::Value`]s. Their shape is owned
//! by the Admin API version in use, and the export writes them back out
//! unchanged, so nothing here models individual product fields.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AdminError;

/// Top-level body of `GET /admin/api/{version}/products.json`.
///
/// A body without a `products` key is treated as an empty page.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Value>,
}

/// One successfully fetched page.
#[derive(Debug)]
pub struct ProductsPage {
    pub products: Vec<Value>,
    /// URL from the `rel="next"` entry of the `Link` header, if any.
    pub next_url: Option<String>,
}

/// Result of walking every page of the product collection.
///
/// A failed page does not discard earlier pages: `products` holds everything
/// collected before the failure and `stopped_early` holds the failure.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub products: Vec<Value>,
    /// Number of HTTP requests issued, including a failed final request.
    pub pages_requested: usize,
    pub stopped_early: Option<AdminError>,
}

impl FetchOutcome {
    /// `true` when the loop ended because no `rel="next"` link remained.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stopped_early.is_none()
    }
}
