//! Fetch-then-save pipeline behind the `shopdump` binary.

use shopdump_admin::{save_products, AdminClient};
use shopdump_core::AppConfig;

/// What a run wrote, for the caller to report on.
#[derive(Debug)]
pub(crate) struct ExportSummary {
    pub saved: usize,
    pub pages_requested: usize,
    /// `false` when pagination stopped before the last page.
    pub complete: bool,
}

/// Fetches every product page and overwrites `config.output_path` with the
/// result.
///
/// The file is written even when pagination stops early, so it always holds
/// the products fetched before the failure.
pub(crate) async fn run_export(config: &AppConfig) -> anyhow::Result<ExportSummary> {
    let client = AdminClient::from_config(config)?;
    let outcome = client
        .fetch_all_products(config.page_limit, config.max_pages)
        .await?;

    save_products(&config.output_path, &outcome.products).await?;
    tracing::info!(
        "Saved {} products to {}",
        outcome.products.len(),
        config.output_path.display()
    );

    Ok(ExportSummary {
        saved: outcome.products.len(),
        pages_requested: outcome.pages_requested,
        complete: outcome.is_complete(),
    })
}
