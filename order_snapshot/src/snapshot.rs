use std::{fs, path::Path};

use chrono::Utc;
use log::*;
use serde::Serialize;
use shopify_tools::ShopifyApi;

use crate::{config::SnapshotConfig, errors::SnapshotError};

/// Runs one fetch-and-save cycle. Nothing is written unless every page was fetched successfully.
pub async fn run_snapshot(api: &ShopifyApi, config: &SnapshotConfig) -> Result<usize, SnapshotError> {
    let query = config.order_query(Utc::now())?;
    let shop = &api.config().shop;
    info!("Fetching {} orders from {shop} created in the last {} days", query.status, config.window_days);
    if config.normalized {
        let orders = api.fetch_normalized_orders(&query).await?;
        save_orders_to_json(&orders, &config.output)
    } else {
        let orders = api.fetch_orders(&query).await?;
        save_orders_to_json(&orders, &config.output)
    }
}

/// Writes `orders` to `path` as a pretty-printed JSON array, replacing any existing file. Missing parent directories
/// are created. Returns the number of records written.
pub fn save_orders_to_json<T: Serialize>(orders: &[T], path: &Path) -> Result<usize, SnapshotError> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|source| SnapshotError::CreateDirectory { path: dir.to_path_buf(), source })?;
    }
    let json = serde_json::to_string_pretty(orders)?;
    fs::write(path, json).map_err(|source| SnapshotError::WriteFile { path: path.to_path_buf(), source })?;
    info!("✅️ Wrote {} orders to {}", orders.len(), path.display());
    Ok(orders.len())
}
