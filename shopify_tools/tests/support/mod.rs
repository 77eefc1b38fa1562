pub mod fake_shopify;
