use axum::http::header::CONTENT_DISPOSITION;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::analytics::ExportDocument;
use crate::enrichment::{format_percent, format_price};
use crate::models::NftItem;

/// `POST /api/export`: turn an enriched NFT into a downloadable stats sheet.
pub async fn export_nft(Json(nft): Json<NftItem>) -> impl IntoResponse {
    let document = ExportDocument::from_item(&nft, Utc::now());
    let disposition = format!("attachment; filename=\"{}\"", document.file_name());

    tracing::debug!(
        contract = %nft.contract_address,
        token_id = %nft.token_id,
        floor = %format_price(nft.floor_price),
        pnl = %format_percent(nft.pnl.map(|p| p.percent)),
        confidence = %nft.price_confidence,
        marketplaces = nft.marketplace_links.len(),
        "Exported NFT stats"
    );

    ([(CONTENT_DISPOSITION, disposition)], Json(document))
}
