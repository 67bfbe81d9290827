use std::path::PathBuf;

/// Store the products are exported from when `SHOPIFY_STORE_URL` is unset.
pub const DEFAULT_STORE_URL: &str = "https://ladani-store-2.myshopify.com";

/// Admin API version pinned when `SHOPIFY_API_VERSION` is unset.
pub const DEFAULT_API_VERSION: &str = "2025-10";

/// Largest page size the Admin API accepts for `products.json`.
pub const MAX_PAGE_LIMIT: u32 = 250;

#[derive(Clone)]
pub struct AppConfig {
    pub access_token: String,
    pub store_url: String,
    pub api_version: String,
    pub page_limit: u32,
    pub output_path: PathBuf,
    /// `None` leaves requests without a timeout.
    pub request_timeout_secs: Option<u64>,
    /// `None` follows `rel="next"` links without a cap.
    pub max_pages: Option<usize>,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("access_token", &"[redacted]")
            .field("store_url", &self.store_url)
            .field("api_version", &self.api_version)
            .field("page_limit", &self.page_limit)
            .field("output_path", &self.output_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_pages", &self.max_pages)
            .field("log_level", &self.log_level)
            .finish()
    }
}
