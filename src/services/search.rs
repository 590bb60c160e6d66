use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::join_all;
use metrics::counter;

use crate::enrichment::{enrich_and_filter, EnrichmentConfig};
use crate::indexer::{IndexerClient, IndexerError};
use crate::models::{Chain, NftItem};

/// Fetch and enrich one wallet's NFTs on one chain.
pub async fn fetch_chain(
    client: &IndexerClient,
    address: &str,
    chain: Chain,
    config: &EnrichmentConfig,
) -> Result<Vec<NftItem>, IndexerError> {
    let raw = client.get_wallet_nfts_on(address, chain).await?;
    let items = enrich_and_filter(&raw, chain, config);

    let dropped = raw.len() - items.len();
    counter!("nfts_enriched_total").increment(items.len() as u64);
    counter!("spam_dropped_total").increment(dropped as u64);

    if dropped > 0 {
        tracing::debug!(chain = %chain, dropped, "Dropped spam NFTs");
    }

    Ok(items)
}

/// Per-chain outcome of a fan-out search.
#[derive(Debug, Default)]
pub struct MultiChainResults {
    items: BTreeMap<Chain, Vec<NftItem>>,
    failures: BTreeMap<Chain, IndexerError>,
}

impl MultiChainResults {
    /// Holdings on `chain`. A failed chain reads as empty.
    pub fn items_on(&self, chain: Chain) -> &[NftItem] {
        self.items.get(&chain).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every successfully fetched item, in chain order.
    pub fn all_items(&self) -> Vec<NftItem> {
        self.items.values().flatten().cloned().collect()
    }

    pub fn total_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn failed_chains(&self) -> Vec<Chain> {
        self.failures.keys().copied().collect()
    }

    /// Remove and return the failure recorded for `chain`, if any.
    pub fn take_failure(&mut self, chain: Chain) -> Option<IndexerError> {
        self.failures.remove(&chain)
    }
}

/// Query every supported chain concurrently and wait for all of them.
///
/// One chain failing never fails the batch; it is recorded and that chain
/// contributes no items.
pub async fn fetch_all_chains(
    client: &IndexerClient,
    address: &str,
    config: &EnrichmentConfig,
) -> MultiChainResults {
    let tasks = Chain::ALL.into_iter().map(|chain| async move {
        let outcome = fetch_chain(client, address, chain, config).await;
        (chain, outcome)
    });

    let mut results = MultiChainResults::default();
    for (chain, outcome) in join_all(tasks).await {
        match outcome {
            Ok(items) => {
                results.items.insert(chain, items);
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    chain = %chain,
                    address = %address,
                    "Chain fetch failed, treating as empty"
                );
                results.failures.insert(chain, e);
            }
        }
    }

    tracing::info!(
        address = %address,
        total = results.total_count(),
        failed = results.failures.len(),
        "Multi-chain search complete"
    );

    results
}

// ---------------------------------------------------------------------------
// Search generations
// ---------------------------------------------------------------------------

/// Handed out when a search starts; identifies it among overlapping
/// searches for the same wallet.
///
/// Dropping an unfinished ticket (the request was cancelled) releases the
/// wallet's entry if it is still the latest one.
#[derive(Debug)]
pub struct SearchTicket {
    tracker: Arc<SearchTracker>,
    key: String,
    pub generation: u64,
    settled: bool,
}

impl SearchTicket {
    /// Close out the search. Returns true when it is still the latest one
    /// for its wallet.
    pub fn finish(mut self) -> bool {
        self.settled = true;
        self.tracker.release(&self.key, self.generation)
    }
}

impl Drop for SearchTicket {
    fn drop(&mut self) {
        if !self.settled {
            self.tracker.release(&self.key, self.generation);
        }
    }
}

/// Tracks the latest search per wallet so a slow, superseded search can be
/// reported as stale instead of overwriting newer results. Holds at most one
/// entry per wallet with a search in flight.
#[derive(Debug, Default)]
pub struct SearchTracker {
    next: AtomicU64,
    latest: Mutex<HashMap<String, u64>>,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(self: &Arc<Self>, address: &str) -> SearchTicket {
        let generation = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        let key = address.to_lowercase();
        self.entries().insert(key.clone(), generation);
        SearchTicket {
            tracker: Arc::clone(self),
            key,
            generation,
            settled: false,
        }
    }

    /// Number of wallets with a search in flight.
    pub fn in_flight(&self) -> usize {
        self.entries().len()
    }

    /// Drop the entry for `key` if `generation` still owns it.
    fn release(&self, key: &str, generation: u64) -> bool {
        let mut latest = self.entries();
        if latest.get(key) == Some(&generation) {
            latest.remove(key);
            true
        } else {
            false
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        // Critical sections never panic midway, so a poisoned map is intact
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
