use std::path::PathBuf;

use shopify_tools::ShopifyApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Could not fetch orders. {0}")]
    Fetch(#[from] ShopifyApiError),
    #[error("Could not create directory {}. {source}", .path.display())]
    CreateDirectory { path: PathBuf, source: std::io::Error },
    #[error("Could not write snapshot to {}. {source}", .path.display())]
    WriteFile { path: PathBuf, source: std::io::Error },
    #[error("A window of {0} days reaches back before the earliest supported date")]
    InvalidWindow(u32),
    #[error("Could not serialize orders. {0}")]
    Serialization(#[from] serde_json::Error),
}
