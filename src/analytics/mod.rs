pub mod export;
pub mod filters;
pub mod portfolio;
pub mod ranking;

#[cfg(test)]
pub(crate) mod test_support;

pub use export::ExportDocument;
pub use filters::{apply_filters, FilterFacets};
pub use portfolio::{HealthLabel, PortfolioSummary};
pub use ranking::{top_by_floor_price, total_floor_value, DEFAULT_TOP_LIMIT};
