use nftscope::api::router::create_router;
use nftscope::config::AppConfig;
use nftscope::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = nftscope::metrics::init_metrics()?;

    tracing::info!(
        indexer = %config.moralis_base_url,
        max_pages = config.moralis_max_pages,
        reference_usd_price = %config.reference_usd_price,
        "Indexer client configured"
    );
    if !config.price_lookup_enabled {
        tracing::info!("ETH/USD lookup disabled (PRICE_LOOKUP_ENABLED=false)");
    }

    let state = AppState::new(config, metrics_handle)?;
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
