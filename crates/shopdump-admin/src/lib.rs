pub mod client;
pub mod error;
pub mod output;
pub mod pagination;
pub mod types;

pub use client::AdminClient;
pub use error::AdminError;
pub use output::save_products;
pub use types::{FetchOutcome, ProductsPage};
