pub mod search;

pub use search::{fetch_all_chains, fetch_chain, MultiChainResults, SearchTicket, SearchTracker};
