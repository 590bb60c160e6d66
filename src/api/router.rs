use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let ops = Router::new()
        .route("/health", get(handlers::ops::health_check))
        .route("/metrics", get(handlers::ops::prometheus_scrape));

    let api = Router::new()
        .route("/api/nfts", get(handlers::nfts::list))
        .route("/api/search", get(handlers::search::search))
        .route("/api/export", post(handlers::export::export_nft));

    // The dashboard is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    ops.merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
