use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use log::*;
use order_snapshot::{cli::Arguments, config::SnapshotConfig, snapshot::run_snapshot};
use shopify_tools::{ShopifyApi, ShopifyConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let config = SnapshotConfig::from(Arguments::parse());
    let api = ShopifyApi::new(ShopifyConfig::new_from_env_or_default())?;
    debug!("Snapshot configuration: {config:?}");
    let count = run_snapshot(&api, &config).await?;
    println!("Wrote {count} orders to {}", config.output.display());
    Ok(())
}
