use crate::enrichment::{generate_marketplace_links, PriceConfidence, RarityTier};
use crate::models::{Chain, NftItem};

/// Minimal enriched record on Ethereum.
pub fn item(token_id: &str, floor: Option<&str>) -> NftItem {
    let mut nft = item_in(token_id, "Test Collection", Chain::Eth);
    nft.floor_price = floor.map(|f| f.parse().unwrap());
    nft
}

pub fn item_in(token_id: &str, collection: &str, chain: Chain) -> NftItem {
    NftItem {
        chain,
        contract_address: "0xabc".into(),
        token_id: token_id.into(),
        name: format!("#{token_id}"),
        image: "https://img.example/1.png".into(),
        collection_name: collection.into(),
        floor_price: None,
        last_sale_price: None,
        last_sale_date: None,
        rarity_rank: None,
        rarity_percent: None,
        rarity_tier: RarityTier::Unknown,
        utility_text: None,
        holder_perks: Vec::new(),
        is_spam: false,
        pnl: None,
        freshness_days: None,
        price_confidence: PriceConfidence::Low,
        marketplace_links: generate_marketplace_links(chain, "0xabc", token_id),
    }
}
