use std::env;

use log::*;

use crate::AccessToken;

const DEFAULT_SHOP: &str = "example.myshopify.com";
const DEFAULT_API_VERSION: &str = "2024-04";
const DEFAULT_SCHEME: &str = "https";

#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    /// The shop's API host, e.g. "my-shop.myshopify.com". A port may be appended ("127.0.0.1:8080").
    pub shop: String,
    pub admin_access_token: AccessToken,
    /// The API version path segment, e.g. "2024-04"
    pub api_version: String,
    /// "https" for real stores. Plain "http" is only useful against a local server.
    pub scheme: String,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            shop: DEFAULT_SHOP.to_string(),
            admin_access_token: AccessToken::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl ShopifyConfig {
    pub fn new(shop: &str, admin_access_token: AccessToken, api_version: &str) -> Self {
        Self { shop: shop.to_string(), admin_access_token, api_version: api_version.to_string(), ..Default::default() }
    }

    /// Reads `SHOP_DOMAIN`, `ACCESS_TOKEN`, `API_VERSION` (or the older `API_VRSION`) and `SHOP_SCHEME`.
    ///
    /// None of the values are validated. A missing value is replaced with a placeholder, which will cause the first
    /// API request to fail.
    pub fn new_from_env_or_default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let shop = lookup("SHOP_DOMAIN").unwrap_or_else(|| {
            warn!("SHOP_DOMAIN not set, using (probably useless) default");
            DEFAULT_SHOP.to_string()
        });
        let api_version = lookup("API_VERSION").or_else(|| lookup("API_VRSION")).unwrap_or_else(|| {
            warn!("API_VERSION not set, using {DEFAULT_API_VERSION} as default");
            DEFAULT_API_VERSION.to_string()
        });
        let admin_access_token = AccessToken::new(lookup("ACCESS_TOKEN").unwrap_or_else(|| {
            warn!("ACCESS_TOKEN not set. Requests will not be authenticated");
            String::default()
        }));
        let scheme = lookup("SHOP_SCHEME").unwrap_or_else(|| DEFAULT_SCHEME.to_string());
        Self { shop, admin_access_token, api_version, scheme }
    }

    /// The root of all REST endpoints for this shop, without a trailing slash.
    pub fn api_root(&self) -> String {
        format!("{}://{}/admin/api/{}", self.scheme, self.shop, self.api_version)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<String, String>>();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn config_from_env() {
        let config = ShopifyConfig::from_lookup(lookup_from(&[
            ("SHOP_DOMAIN", "my-shop.myshopify.com"),
            ("ACCESS_TOKEN", "shpat_abc"),
            ("API_VERSION", "2025-01"),
        ]));
        assert_eq!(config.shop, "my-shop.myshopify.com");
        assert_eq!(config.admin_access_token.reveal(), "shpat_abc");
        assert_eq!(config.api_root(), "https://my-shop.myshopify.com/admin/api/2025-01");
    }

    #[test]
    fn legacy_api_version_name() {
        let config = ShopifyConfig::from_lookup(lookup_from(&[("API_VRSION", "2023-10")]));
        assert_eq!(config.api_version, "2023-10");
        let config = ShopifyConfig::from_lookup(lookup_from(&[("API_VRSION", "2023-10"), ("API_VERSION", "2024-07")]));
        assert_eq!(config.api_version, "2024-07");
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = ShopifyConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.shop, "example.myshopify.com");
        assert!(config.admin_access_token.is_empty());
        assert_eq!(config.api_root(), "https://example.myshopify.com/admin/api/2024-04");
    }

    #[test]
    fn plain_http_scheme() {
        let config =
            ShopifyConfig::from_lookup(lookup_from(&[("SHOP_DOMAIN", "127.0.0.1:8080"), ("SHOP_SCHEME", "http")]));
        assert_eq!(config.api_root(), "http://127.0.0.1:8080/admin/api/2024-04");
    }
}
