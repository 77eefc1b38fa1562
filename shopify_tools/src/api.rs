use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, LINK},
    Client,
    RequestBuilder,
    Response,
};
use serde::Deserialize;
use url::Url;

use crate::{config::ShopifyConfig, helpers::next_page_link, NormalizedOrder, ShopifyApiError, ShopifyOrder};

/// The order fields requested from `orders.json`.
pub const ORDER_FIELDS: [&str; 12] = [
    "name",
    "customer",
    "shipping_address",
    "billing_address",
    "created_at",
    "email",
    "total_price",
    "financial_status",
    "fulfillment_status",
    "currency",
    "tags",
    "fulfillments",
];

/// Filter and page size for an order listing.
#[derive(Debug, Clone)]
pub struct OrderQuery {
    /// Orders per page. Shopify caps this at 250.
    pub limit: u32,
    /// One of "open", "closed", "cancelled" or "any"
    pub status: String,
    /// Only orders created at or after this time are returned
    pub created_at_min: Option<DateTime<Utc>>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self { limit: 250, status: "any".to_string(), created_at_min: None }
    }
}

impl OrderQuery {
    pub fn created_since(created_at_min: DateTime<Utc>) -> Self {
        Self { created_at_min: Some(created_at_min), ..Default::default() }
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("status", self.status.clone()),
            ("fields", ORDER_FIELDS.join(",")),
        ];
        if let Some(min) = self.created_at_min {
            params.push(("created_at_min", min.to_rfc3339_opts(SecondsFormat::Micros, false)));
        }
        params
    }
}

#[derive(Clone)]
pub struct ShopifyApi {
    config: ShopifyConfig,
    client: Arc<Client>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let val = HeaderValue::from_str(config.admin_access_token.reveal())
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        headers.insert("X-Shopify-Access-Token", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_root())
    }

    /// Sends the request and hands back the response if the server returned a 2xx status. Any other status is
    /// turned into a [`ShopifyApiError::QueryError`] carrying the response body.
    async fn execute(&self, req: RequestBuilder) -> Result<Response, ShopifyApiError> {
        let response = req.send().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
            Err(ShopifyApiError::QueryError { status, message })
        }
    }

    /// Fetches every order matching `query`, following the `Link: <...>; rel="next"` header from page to page.
    ///
    /// Orders are returned in the order the server sent them. Fetching stops when a page has no `next` link, or when a
    /// page comes back empty. Any failed request aborts the whole fetch; orders from earlier pages are discarded.
    pub async fn fetch_orders(&self, query: &OrderQuery) -> Result<Vec<ShopifyOrder>, ShopifyApiError> {
        #[derive(Deserialize)]
        struct OrdersPage {
            orders: Option<Vec<ShopifyOrder>>,
        }
        let mut orders = vec![];
        let mut page = 1;
        let first_url = self.url("/orders.json");
        debug!("Fetching orders from {first_url} ({query:?})");
        let mut req = self.client.get(first_url).query(&query.query_params());
        loop {
            let response = self.execute(req).await?;
            let next = match response.headers().get(LINK) {
                Some(link) => {
                    let link = link
                        .to_str()
                        .map_err(|e| ShopifyApiError::RestResponseError(format!("Unreadable Link header. {e}")))?;
                    next_page_link(link).map(String::from)
                },
                None => None,
            };
            let batch = response
                .json::<OrdersPage>()
                .await
                .map_err(|e| ShopifyApiError::JsonError(e.to_string()))?
                .orders
                .unwrap_or_default();
            if batch.is_empty() {
                debug!("Page {page} is empty. Done.");
                break;
            }
            debug!("Page {page} returned {} orders", batch.len());
            orders.extend(batch);
            let Some(next) = next else {
                debug!("Page {page} is the last page.");
                break;
            };
            let next = self.validate_next_page_url(&next)?;
            trace!("Next page: {next}");
            req = self.client.get(next);
            page += 1;
        }
        info!("Fetched {} orders in {page} page(s)", orders.len());
        Ok(orders)
    }

    /// Fetches orders exactly like [`fetch_orders`](Self::fetch_orders), and flattens each into a [`NormalizedOrder`].
    pub async fn fetch_normalized_orders(&self, query: &OrderQuery) -> Result<Vec<NormalizedOrder>, ShopifyApiError> {
        let orders = self.fetch_orders(query).await?;
        Ok(orders.iter().map(NormalizedOrder::from).collect())
    }

    /// Next page links are used verbatim, but only if they point back at the configured shop.
    fn validate_next_page_url(&self, link: &str) -> Result<Url, ShopifyApiError> {
        let invalid = |reason: String| ShopifyApiError::InvalidNextPageUrl { url: link.to_string(), reason };
        let next = Url::parse(link).map_err(|e| invalid(e.to_string()))?;
        let root = Url::parse(&self.config.api_root()).map_err(|e| invalid(format!("Invalid API root. {e}")))?;
        if next.scheme() != root.scheme() {
            return Err(invalid(format!("Expected a {} URL", root.scheme())));
        }
        if next.host_str() != root.host_str() || next.port_or_known_default() != root.port_or_known_default() {
            return Err(invalid(format!("It does not point at {}", self.config.shop)));
        }
        Ok(next)
    }
}
