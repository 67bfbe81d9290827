use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_API_VERSION, DEFAULT_STORE_URL, MAX_PAGE_LIMIT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Loads `.env.local` and then `.env` before reading env vars. Neither file
/// overrides variables already present in the process, and missing files are
/// ignored.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Empty values count as unset: `SHOPIFY_ACCESS_TOKEN=` in a dotenv file
    // must not produce unauthenticated requests.
    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let require = |var: &str| -> Result<String, ConfigError> {
        non_empty(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        non_empty(var).unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let access_token = require("SHOPIFY_ACCESS_TOKEN")?;

    let store_url = or_default("SHOPIFY_STORE_URL", DEFAULT_STORE_URL);
    if !(store_url.starts_with("https://") || store_url.starts_with("http://")) {
        return Err(invalid(
            "SHOPIFY_STORE_URL",
            format!("\"{store_url}\" must start with http:// or https://"),
        ));
    }
    let store_url = store_url.trim_end_matches('/').to_string();

    let api_version = or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION);

    let page_limit = or_default("SHOPDUMP_PAGE_LIMIT", "250")
        .parse::<u32>()
        .map_err(|e| invalid("SHOPDUMP_PAGE_LIMIT", e.to_string()))?;
    if page_limit == 0 || page_limit > MAX_PAGE_LIMIT {
        return Err(invalid(
            "SHOPDUMP_PAGE_LIMIT",
            format!("{page_limit} is outside 1..={MAX_PAGE_LIMIT}"),
        ));
    }

    let output_path = PathBuf::from(or_default("SHOPDUMP_OUTPUT_PATH", "product.json"));

    let request_timeout_secs = match non_empty("SHOPDUMP_REQUEST_TIMEOUT_SECS") {
        None => None,
        Some(raw) => {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| invalid("SHOPDUMP_REQUEST_TIMEOUT_SECS", e.to_string()))?;
            (secs > 0).then_some(secs)
        }
    };

    let max_pages = match non_empty("SHOPDUMP_MAX_PAGES") {
        None => None,
        Some(raw) => {
            let pages = raw
                .parse::<usize>()
                .map_err(|e| invalid("SHOPDUMP_MAX_PAGES", e.to_string()))?;
            if pages == 0 {
                return Err(invalid("SHOPDUMP_MAX_PAGES", "must be at least 1".to_string()));
            }
            Some(pages)
        }
    };

    let log_level = or_default("SHOPDUMP_LOG_LEVEL", "info");

    Ok(AppConfig {
        access_token,
        store_url,
        api_version,
        page_limit,
        output_path,
        request_timeout_secs,
        max_pages,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
