//! HTTP client for the Admin API `products.json` endpoint.

mod fetch_all;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use shopdump_core::AppConfig;

use crate::error::AdminError;
use crate::pagination::extract_next_url;
use crate::types::{ProductsPage, ProductsResponse};

const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

const USER_AGENT: &str = "shopdump/0.1 (product-export)";

/// HTTP client for a single store's Admin API.
///
/// Every request carries the `X-Shopify-Access-Token` and
/// `Content-Type: application/json` headers. Responses are surfaced as typed
/// errors; nothing is retried.
pub struct AdminClient {
    pub(super) client: Client,
    pub(super) store_url: String,
    pub(super) api_version: String,
}

impl AdminClient {
    /// Creates an `AdminClient` for `store_url` pinned to `api_version`.
    ///
    /// `timeout_secs` of `None` leaves requests without a timeout.
    ///
    /// # Errors
    ///
    /// - [`AdminError::InvalidAccessToken`] if the token contains bytes that
    ///   are not valid in an HTTP header.
    /// - [`AdminError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        store_url: &str,
        api_version: &str,
        access_token: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, AdminError> {
        let mut token =
            HeaderValue::from_str(access_token).map_err(AdminError::InvalidAccessToken)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            store_url: store_url.trim_end_matches('/').to_owned(),
            api_version: api_version.to_owned(),
        })
    }

    /// Creates an `AdminClient` from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`AdminClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AdminError> {
        Self::new(
            &config.store_url,
            &config.api_version,
            &config.access_token,
            config.request_timeout_secs,
        )
    }

    /// Fetches one page of products from `url`.
    ///
    /// The body's `products` array is returned as-is along with the next-page
    /// URL taken from the `Link` header.
    ///
    /// # Errors
    ///
    /// - [`AdminError::UnexpectedStatus`] — any status other than 200; carries the response body.
    /// - [`AdminError::Http`] — network or TLS failure.
    /// - [`AdminError::Deserialize`] — response body is not a JSON object.
    pub async fn fetch_page(&self, url: &str) -> Result<ProductsPage, AdminError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!(url, error = %e, "could not read error response body");
                String::new()
            });
            return Err(AdminError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
                body,
            });
        }

        // Extract the Link header before consuming the response body.
        let next_url = extract_next_url(link_header(response.headers()).as_deref());

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ProductsResponse>(&body).map_err(|e| {
            AdminError::Deserialize {
                context: format!("products page {url}"),
                source: e,
            }
        })?;

        Ok(ProductsPage {
            products: parsed.products,
            next_url,
        })
    }

    /// Builds the first-page URL:
    /// `{store_url}/admin/api/{api_version}/products.json?limit={limit}`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidStoreUrl`] if the result is not a valid URL.
    pub fn products_url(&self, limit: u32) -> Result<String, AdminError> {
        let base = format!(
            "{}/admin/api/{}/products.json",
            self.store_url, self.api_version
        );
        let mut url = reqwest::Url::parse(&base).map_err(|e| AdminError::InvalidStoreUrl {
            store_url: self.store_url.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut().append_pair("limit", &limit.to_string());

        Ok(url.to_string())
    }
}

/// Joins every `Link` header line with `", "`, as if the relations had been
/// sent on one line. Lines that are not valid visible ASCII are skipped.
fn link_header(headers: &HeaderMap) -> Option<String> {
    let lines: Vec<&str> = headers
        .get_all(reqwest::header::LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    (!lines.is_empty()).then(|| lines.join(", "))
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
