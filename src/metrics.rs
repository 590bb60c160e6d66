use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("searches_total").absolute(0);
    counter!("nfts_enriched_total").absolute(0);
    counter!("spam_dropped_total").absolute(0);
    counter!("stale_searches_total").absolute(0);
    gauge!("searches_in_flight").set(0.0);

    // Histogram is lazily created on first record; force creation.
    histogram!("indexer_latency_seconds").record(0.0);

    Ok(handle)
}

/// A handle backed by a recorder that is not installed globally. Lets tests
/// build several app states in one process.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
