use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analytics::apply_filters;
use crate::errors::AppError;
use crate::models::{Chain, FilterState, NftItem};
use crate::services::fetch_chain;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NftsQuery {
    pub address: Option<String>,
    pub chain: Option<String>,
    /// Comma-separated collection names.
    pub collections: Option<String>,
    /// Comma-separated chain tags.
    pub chains: Option<String>,
}

#[derive(Serialize)]
pub struct NftsResponse {
    pub success: bool,
    pub count: usize,
    pub nfts: Vec<NftItem>,
}

/// Validate the wallet/chain pair shared by the NFT endpoints.
pub(crate) fn parse_target(
    address: Option<&str>,
    chain: Option<&str>,
) -> Result<(String, Chain), AppError> {
    let address = address.map(str::trim).filter(|a| !a.is_empty());
    let chain = chain.map(str::trim).filter(|c| !c.is_empty());

    match (address, chain) {
        (Some(address), Some(chain)) => Ok((address.to_string(), chain.parse()?)),
        _ => Err(AppError::BadRequest(
            "Missing address or chain parameter".into(),
        )),
    }
}

/// `GET /api/nfts?address=..&chain=..`: one wallet on one chain, spam
/// removed, optional collection/chain filters applied.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<NftsQuery>,
) -> Result<Json<NftsResponse>, AppError> {
    let (address, chain) = parse_target(query.address.as_deref(), query.chain.as_deref())?;
    let filter = FilterState::from_query(query.collections.as_deref(), query.chains.as_deref())?;

    let items = fetch_chain(&state.indexer, &address, chain, &state.enrichment).await?;
    let nfts = if filter.is_empty() {
        items
    } else {
        apply_filters(&items, &filter)
    };

    tracing::info!(
        address = %address,
        chain = %chain,
        count = nfts.len(),
        "Served wallet NFTs"
    );

    Ok(Json(NftsResponse {
        success: true,
        count: nfts.len(),
        nfts,
    }))
}
