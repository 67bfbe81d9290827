//! Multi-page product fetch loop for `AdminClient`.

use crate::error::AdminError;
use crate::types::FetchOutcome;

use super::AdminClient;

impl AdminClient {
    /// Fetches every product by following `rel="next"` links from the first page.
    ///
    /// Requests are issued one at a time and each page's products are appended
    /// in server order. The loop ends when a response has no `rel="next"` link.
    ///
    /// **Partial-result semantics**: a failed page (any status other than 200,
    /// network error, undecodable body) stops the loop, is logged, and is returned in
    /// [`FetchOutcome::stopped_early`] alongside the products collected before
    /// it. With `max_pages` set, reaching the cap is reported the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidStoreUrl`] if the first-page URL cannot be
    /// built; no request is issued in that case.
    pub async fn fetch_all_products(
        &self,
        limit: u32,
        max_pages: Option<usize>,
    ) -> Result<FetchOutcome, AdminError> {
        let mut outcome = FetchOutcome::default();
        let mut next_url = Some(self.products_url(limit)?);

        while let Some(url) = next_url.take() {
            if let Some(max_pages) = max_pages {
                if outcome.pages_requested >= max_pages {
                    tracing::warn!(max_pages, next_url = %url, "page limit reached, stopping");
                    outcome.stopped_early = Some(AdminError::PageLimit {
                        max_pages,
                        next_url: url,
                    });
                    break;
                }
            }

            tracing::info!("Fetching: {url}");
            outcome.pages_requested += 1;

            match self.fetch_page(&url).await {
                Ok(page) => {
                    tracing::debug!(
                        page = outcome.pages_requested,
                        count = page.products.len(),
                        has_next = page.next_url.is_some(),
                        "products page fetched"
                    );
                    outcome.products.extend(page.products);
                    next_url = page.next_url;
                }
                Err(e) => {
                    tracing::error!(
                        page = outcome.pages_requested,
                        collected = outcome.products.len(),
                        error = %e,
                        "Error: products page failed, keeping products collected so far"
                    );
                    outcome.stopped_early = Some(e);
                }
            }
        }

        Ok(outcome)
    }
}
