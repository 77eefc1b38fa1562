//! A fake Shopify REST Admin API for integration tests.
//!
//! Serves `GET /admin/api/2024-04/orders.json` from a scripted list of pages on a random port on 127.0.0.1. The first
//! request gets page 0; page `n` is requested with `page_info=n`, which is what the generated `Link` headers point at.
use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use shopify_tools::{AccessToken, ShopifyConfig};
use tokio::{net::TcpListener, sync::Mutex};

pub const API_VERSION: &str = "2024-04";
pub const ACCESS_TOKEN: &str = "shpat_fake_token";

#[derive(Debug, Clone)]
pub enum Link {
    /// No Link header at all
    None,
    /// `rel="next"` pointing at the following page on this server
    Next,
    /// `rel="previous"` back at the preceding page, followed by `rel="next"`
    PreviousAndNext,
    /// A verbatim Link header value
    Raw(String),
    /// A Link header value made of arbitrary bytes, not necessarily visible ASCII
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub body: Value,
    pub link: Link,
}

impl Page {
    pub fn orders(orders: Vec<Value>, link: Link) -> Self {
        Self { status: StatusCode::OK, body: json!({ "orders": orders }), link }
    }

    pub fn error(status: StatusCode) -> Self {
        Self { status, body: json!({ "errors": "Something went wrong" }), link: Link::None }
    }
}

/// What the server saw for a single request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub params: HashMap<String, String>,
    pub access_token: Option<String>,
}

struct ApiState {
    base_url: String,
    pages: Vec<Page>,
    requests: Vec<RecordedRequest>,
}

pub struct FakeShopify {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeShopify {
    pub async fn start(pages: Vec<Page>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{addr}");
        let state = Arc::new(Mutex::new(ApiState { base_url, pages, requests: vec![] }));
        let app = Router::new()
            .route(&format!("/admin/api/{API_VERSION}/orders.json"), get(list_orders))
            .with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Ok(Self { addr, state })
    }

    pub fn config(&self) -> ShopifyConfig {
        let mut config = ShopifyConfig::new(&self.addr.to_string(), AccessToken::new(ACCESS_TOKEN), API_VERSION);
        config.scheme = "http".to_string();
        config
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }
}

pub fn order(name: &str) -> Value {
    json!({ "name": name, "customer": null, "email": format!("{}@example.com", name.trim_start_matches('#')) })
}

async fn list_orders(
    State(state): State<Arc<Mutex<ApiState>>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.lock().await;
    let access_token = headers.get("X-Shopify-Access-Token").and_then(|v| v.to_str().ok()).map(String::from);
    state.requests.push(RecordedRequest { params: params.clone(), access_token });
    let index = params.get("page_info").and_then(|p| p.parse::<usize>().ok()).unwrap_or(0);
    let Some(page) = state.pages.get(index).cloned() else {
        return (StatusCode::NOT_FOUND, "No such page").into_response();
    };
    let mut response_headers = HeaderMap::new();
    let page_url = |n: usize| format!("{}/admin/api/{API_VERSION}/orders.json?limit=250&page_info={n}", state.base_url);
    let link = match page.link {
        Link::None => None,
        Link::Next => Some(format!("<{}>; rel=\"next\"", page_url(index + 1)).into_bytes()),
        Link::PreviousAndNext => Some(format!(
            "<{}>; rel=\"previous\", <{}>; rel=\"next\"",
            page_url(index.saturating_sub(1)),
            page_url(index + 1)
        )
        .into_bytes()),
        Link::Raw(s) => Some(s.into_bytes()),
        Link::Bytes(b) => Some(b),
    };
    if let Some(link) = link {
        response_headers.insert(header::LINK, HeaderValue::from_bytes(&link).unwrap());
    }
    (page.status, response_headers, page.body.to_string()).into_response()
}
