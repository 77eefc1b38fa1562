use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_LIMIT, DEFAULT_OUTPUT_PATH, DEFAULT_STATUS, DEFAULT_WINDOW_DAYS};

/// Fetches recent orders from a Shopify store and writes them to a JSON file.
///
/// The store is configured through the environment (a `.env` file is also read):
///   SHOP_DOMAIN    the store's API host, e.g. my-shop.myshopify.com
///   ACCESS_TOKEN   an Admin API access token
///   API_VERSION    the Admin API version, e.g. 2024-04
#[derive(Parser, Debug)]
#[command(version, verbatim_doc_comment)]
pub struct Arguments {
    /// Where to write the snapshot
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Only include orders created within this many days
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub days: u32,
    /// Order status filter (open, closed, cancelled or any)
    #[arg(short, long, default_value = DEFAULT_STATUS)]
    pub status: String,
    /// Orders requested per page
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
    /// Write flattened records (customer name, delivery status, ...) instead of the raw API records
    #[arg(short, long)]
    pub normalized: bool,
}
