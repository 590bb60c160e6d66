use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use nftscope::api::router::create_router;
use nftscope::config::AppConfig;
use nftscope::AppState;

#[allow(dead_code)]
pub const API_KEY: &str = "test-key";

/// Canned behaviour for one chain (keyed by hex chain id).
#[derive(Debug, Clone, Default)]
pub struct MockChain {
    pub pages: Vec<Vec<Value>>,
    pub fail_status: Option<u16>,
}

#[allow(dead_code)]
impl MockChain {
    pub fn single(records: Vec<Value>) -> Self {
        Self {
            pages: vec![records],
            fail_status: None,
        }
    }

    pub fn paged(pages: Vec<Vec<Value>>) -> Self {
        Self {
            pages,
            fail_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            pages: Vec::new(),
            fail_status: Some(status),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockIndexer {
    pub chains: HashMap<&'static str, MockChain>,
    /// Requests for these exact path addresses are answered slowly.
    pub slow_addresses: HashSet<String>,
    /// `usd` value served at `/simple/price`; unset answers 500.
    pub eth_usd: Option<Value>,
    pub requests: AtomicUsize,
}

#[allow(dead_code)]
impl MockIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(mut self, chain_id: &'static str, chain: MockChain) -> Self {
        self.chains.insert(chain_id, chain);
        self
    }

    pub fn with_slow_address(mut self, address: &str) -> Self {
        self.slow_addresses.insert(address.to_string());
        self
    }

    pub fn with_eth_usd(mut self, usd: Value) -> Self {
        self.eth_usd = Some(usd);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

async fn wallet_nfts(
    State(mock): State<Arc<MockIndexer>>,
    Path(address): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    mock.requests.fetch_add(1, Ordering::SeqCst);

    if mock.slow_addresses.contains(&address) {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid API key" })),
        )
            .into_response();
    }

    let chain = params.get("chain").map(String::as_str).unwrap_or_default();
    let Some(entry) = mock.chains.get(chain) else {
        return Json(json!({ "page": 0, "page_size": 100, "cursor": null, "result": [] }))
            .into_response();
    };

    if let Some(status) = entry.fail_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({ "message": "upstream exploded" }))).into_response();
    }

    let page = params
        .get("cursor")
        .and_then(|c| c.strip_prefix('p'))
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(0);
    let result = entry.pages.get(page).cloned().unwrap_or_default();
    let cursor = (page + 1 < entry.pages.len()).then(|| format!("p{}", page + 1));

    Json(json!({
        "page": page,
        "page_size": 100,
        "cursor": cursor,
        "result": result,
    }))
    .into_response()
}

async fn simple_price(
    State(mock): State<Arc<MockIndexer>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let wants_eth_usd = params.get("ids").map(String::as_str) == Some("ethereum")
        && params.get("vs_currencies").map(String::as_str) == Some("usd");

    match &mock.eth_usd {
        Some(usd) if wants_eth_usd => Json(json!({ "ethereum": { "usd": usd } })).into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "price feed down" })),
        )
            .into_response(),
    }
}

/// Serve the mock on an ephemeral port. Returns its base URL.
#[allow(dead_code)]
pub async fn spawn_mock_indexer(mock: Arc<MockIndexer>) -> String {
    let app = Router::new()
        .route("/:address/nft", get(wallet_nfts))
        .route("/simple/price", get(simple_price))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock indexer");
    let addr = listener.local_addr().expect("Mock indexer has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}")
}

/// A raw indexer record in the API's wire format.
#[allow(dead_code)]
pub fn nft_json(
    token_id: &str,
    collection: &str,
    floor_usd: Option<&str>,
    last_sale: Option<(&str, i64)>,
    spam: bool,
) -> Value {
    let last_sale = last_sale.map(|(price, days_ago)| {
        json!({
            "price_formatted": price,
            "block_timestamp": (Utc::now() - chrono::Duration::days(days_ago)).to_rfc3339(),
        })
    });

    json!({
        "token_address": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
        "token_id": token_id,
        "name": "TestContract",
        "possible_spam": spam,
        "floor_price_usd": floor_usd,
        "rarity_rank": 10,
        "rarity_percentage": 4.2,
        "collection": {
            "name": collection,
            "description": "Exclusive DAO access and staking rewards for holders",
        },
        "normalized_metadata": {
            "name": format!("{collection} #{token_id}"),
            "image": format!("ipfs://QmTest/{token_id}.png"),
        },
        "last_sale": last_sale,
    })
}

#[allow(dead_code)]
pub fn build_test_app(indexer_url: &str) -> Router {
    app_with_config(AppConfig::for_indexer(indexer_url))
}

/// Test app that also looks up ETH/USD, served by the same mock.
#[allow(dead_code)]
pub fn build_test_app_with_prices(mock_url: &str) -> Router {
    let mut config = AppConfig::for_indexer(mock_url);
    config.price_lookup_enabled = true;
    config.price_api_url = mock_url.to_string();
    app_with_config(config)
}

fn app_with_config(config: AppConfig) -> Router {
    let state = AppState::new(config, nftscope::metrics::detached_handle())
        .expect("Failed to build app state");
    create_router(state)
}
