use axum::extract::{Query, State};
use axum::Json;
use metrics::{counter, gauge};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nfts::parse_target;
use crate::analytics::{
    apply_filters, top_by_floor_price, total_floor_value, FilterFacets, PortfolioSummary,
};
use crate::enrichment::{format_percent, format_price};
use crate::errors::AppError;
use crate::models::{Chain, FilterState, NftItem};
use crate::services::fetch_all_chains;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub address: Option<String>,
    pub chain: Option<String>,
    /// Size of the cross-chain top list.
    pub limit: Option<usize>,
    pub collections: Option<String>,
    pub chains: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    /// Monotonic search number for this wallet.
    pub generation: u64,
    /// A newer search for the same wallet started before this one finished.
    pub stale: bool,
    pub chain: Chain,
    pub count: usize,
    /// Selected chain's NFTs after filters.
    pub nfts: Vec<NftItem>,
    pub facets: FilterFacets,
    /// Computed over the selected chain, before filters.
    pub summary: PortfolioSummary,
    pub top_nfts: Vec<NftItem>,
    pub top_value: Decimal,
    pub top_value_usd: Option<Decimal>,
    pub total_across_chains: usize,
    pub failed_chains: Vec<Chain>,
    pub eth_price_usd: Option<Decimal>,
    pub notice: Option<String>,
}

/// `GET /api/search?address=..&chain=..`: fetch every chain at once. The
/// selected chain feeds the grid and summary, all chains feed the top list.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let (address, chain) = parse_target(query.address.as_deref(), query.chain.as_deref())?;
    let filter = FilterState::from_query(query.collections.as_deref(), query.chains.as_deref())?;
    let limit = query.limit.unwrap_or(state.config.top_nft_limit);

    counter!("searches_total").increment(1);
    let ticket = state.searches.begin(&address);
    let generation = ticket.generation;
    gauge!("searches_in_flight").set(state.searches.in_flight() as f64);

    let price_lookup = async {
        if state.config.price_lookup_enabled {
            state.prices.eth_usd().await
        } else {
            None
        }
    };
    let (mut results, eth_price_usd) = tokio::join!(
        fetch_all_chains(&state.indexer, &address, &state.enrichment),
        price_lookup
    );

    let current = ticket.finish();
    if !current {
        counter!("stale_searches_total").increment(1);
        tracing::info!(
            address = %address,
            generation,
            "Search superseded by a newer one"
        );
    }

    // The selected chain is the primary view; its failure is the caller's error
    if let Some(err) = results.take_failure(chain) {
        return Err(err.into());
    }

    let chain_items = results.items_on(chain).to_vec();
    let all_items = results.all_items();

    let top_nfts = top_by_floor_price(&all_items, limit);
    let top_value = total_floor_value(&top_nfts);
    let top_value_usd = eth_price_usd.and_then(|usd| top_value.checked_mul(usd));

    let notice = (chain_items.is_empty() && !all_items.is_empty()).then(|| {
        format!(
            "No NFTs found on {}, but found {} NFTs across all chains",
            chain.as_str().to_uppercase(),
            all_items.len()
        )
    });

    let summary = PortfolioSummary::from_records(&chain_items);
    let facets = FilterFacets::from_records(&chain_items);
    let nfts = apply_filters(&chain_items, &filter);

    tracing::info!(
        address = %address,
        chain = %chain,
        count = nfts.len(),
        portfolio_value = %format_price(Some(summary.portfolio_value)),
        pnl = %format_percent(Some(summary.pnl_percent)),
        top_value = %format_price(Some(top_value)),
        "Search served"
    );

    Ok(Json(SearchResponse {
        success: true,
        generation,
        stale: !current,
        chain,
        count: nfts.len(),
        nfts,
        facets,
        summary,
        top_nfts,
        top_value,
        top_value_usd,
        total_across_chains: all_items.len(),
        failed_chains: results.failed_chains(),
        eth_price_usd,
        notice,
    }))
}
