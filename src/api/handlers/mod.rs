pub mod export;
pub mod nfts;
pub mod ops;
pub mod search;
