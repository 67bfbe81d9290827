//! Writes the collected products to the export file.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::error::AdminError;

/// Renders products as a JSON array indented with four spaces.
///
/// Non-ASCII characters are written as UTF-8, not `\u` escapes.
///
/// # Errors
///
/// Returns [`AdminError::Serialize`] if a value cannot be serialized.
pub fn render_products(products: &[Value]) -> Result<Vec<u8>, AdminError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    products
        .serialize(&mut serializer)
        .map_err(AdminError::Serialize)?;
    Ok(buf)
}

/// Overwrites `path` with the rendered product array.
///
/// The file is created (or truncated), written and flushed once.
///
/// # Errors
///
/// - [`AdminError::Serialize`] if rendering fails.
/// - [`AdminError::Write`] if the file cannot be created or written.
pub async fn save_products(path: &Path, products: &[Value]) -> Result<(), AdminError> {
    let rendered = render_products(products)?;
    let write_err = |source| AdminError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(path).await.map_err(write_err)?;
    file.write_all(&rendered).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;

    tracing::debug!(path = %path.display(), bytes = rendered.len(), "products file written");
    Ok(())
}
