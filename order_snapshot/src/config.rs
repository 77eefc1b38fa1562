use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use shopify_tools::OrderQuery;

use crate::{cli::Arguments, errors::SnapshotError};

pub const DEFAULT_OUTPUT_PATH: &str = "docs/data/orders.json";
pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_STATUS: &str = "any";
pub const DEFAULT_LIMIT: u32 = 250;

#[derive(Clone, Debug)]
pub struct SnapshotConfig {
    pub output: PathBuf,
    /// Orders created within this many days before the run are included
    pub window_days: u32,
    pub status: String,
    pub limit: u32,
    /// If true, flattened `NormalizedOrder`s are written rather than the records Shopify returned
    pub normalized: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            window_days: DEFAULT_WINDOW_DAYS,
            status: DEFAULT_STATUS.to_string(),
            limit: DEFAULT_LIMIT,
            normalized: false,
        }
    }
}

impl From<Arguments> for SnapshotConfig {
    fn from(args: Arguments) -> Self {
        Self {
            output: args.output,
            window_days: args.days,
            status: args.status,
            limit: args.limit,
            normalized: args.normalized,
        }
    }
}

impl SnapshotConfig {
    /// The order listing for a run starting at `now`. Fails if the window reaches back past the earliest
    /// representable date.
    pub fn order_query(&self, now: DateTime<Utc>) -> Result<OrderQuery, SnapshotError> {
        let created_at_min = now
            .checked_sub_signed(Duration::days(i64::from(self.window_days)))
            .ok_or(SnapshotError::InvalidWindow(self.window_days))?;
        Ok(OrderQuery { limit: self.limit, status: self.status.clone(), created_at_min: Some(created_at_min) })
    }
}
