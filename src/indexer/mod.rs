pub mod client;
pub mod price_client;
pub mod types;

pub use client::{IndexerClient, IndexerError};
pub use price_client::PriceClient;
pub use types::{LastSale, RawCollection, RawNft, WalletNftsPage};
