mod access_token;
mod api;
mod config;
mod error;
mod normalize;
mod shopify_order;

pub mod helpers;

pub use access_token::AccessToken;
pub use api::{OrderQuery, ShopifyApi, ORDER_FIELDS};
pub use config::ShopifyConfig;
pub use error::ShopifyApiError;
pub use normalize::{NormalizedOrder, GUEST_CUSTOMER_NAME, NO_DELIVERY_STATUS};
pub use shopify_order::{Address, Customer, Fulfillment, ShopifyOrder};
