pub mod freshness;
pub mod marketplace;
pub mod media;
pub mod pipeline;
pub mod pricing;
pub mod rarity;
pub mod utility;

pub use freshness::{calculate_freshness, PriceConfidence};
pub use marketplace::generate_marketplace_links;
pub use media::resolve_image_url;
pub use pipeline::{enrich_and_filter, enrich_and_filter_at, enrich_record, EnrichmentConfig};
pub use pricing::{calculate_pnl, format_percent, format_price, normalize_floor_price};
pub use rarity::RarityTier;
pub use utility::{detect_utility, parse_holder_perks};
