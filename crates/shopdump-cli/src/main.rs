mod export;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Every flag is optional; without flags the configuration comes from the
/// environment (and `.env.local` / `.env`).
#[derive(Debug, Parser)]
#[command(name = "shopdump")]
#[command(about = "Export every product of a store's Admin API to a JSON file")]
struct Cli {
    /// File to overwrite with the product array (default: product.json).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Store base URL, e.g. `https://example.myshopify.com`.
    #[arg(long)]
    store_url: Option<String>,

    /// Admin API version, e.g. `2025-10`.
    #[arg(long)]
    api_version: Option<String>,

    /// Products per page.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=250))]
    limit: Option<u32>,

    /// Stop after this many page requests.
    #[arg(long)]
    max_pages: Option<NonZeroUsize>,
}

impl Cli {
    fn apply(self, config: &mut shopdump_core::AppConfig) {
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(store_url) = self.store_url {
            config.store_url = store_url.trim_end_matches('/').to_owned();
        }
        if let Some(api_version) = self.api_version {
            config.api_version = api_version;
        }
        if let Some(limit) = self.limit {
            config.page_limit = limit;
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = Some(max_pages.get());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing access token fails here, before any request is made.
    let mut config = shopdump_core::load_app_config()?;
    cli.apply(&mut config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let summary = export::run_export(&config).await?;
    if !summary.complete {
        tracing::warn!(
            saved = summary.saved,
            pages = summary.pages_requested,
            "export stopped early; the file holds only the pages fetched before the failure"
        );
    }

    Ok(())
}
