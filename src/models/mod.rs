pub mod chain;
pub mod filter;
pub mod nft;

pub use chain::{Chain, UnsupportedChain};
pub use filter::FilterState;
pub use nft::{MarketplaceLinks, NftItem, Pnl};
