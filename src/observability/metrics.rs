//! Metrics collection and exposition.
//!
//! # Metrics
//! - `payment.transactions` (counter): successful charges, labelled by
//!   `payment.currency`
//!
//! # Design Decisions
//! - Counts are kept in-process (atomic per currency) and mirrored to the
//!   `metrics` facade, so they are observable with or without an exporter
//! - Prometheus exporter is optional and installed once at startup

use dashmap::DashMap;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter name for approved charges.
pub const TRANSACTIONS: &str = "payment.transactions";

/// Label carrying the ISO 4217 currency code.
pub const CURRENCY_LABEL: &str = "payment.currency";

/// Install the Prometheus exporter with an HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), metrics_exporter_prometheus::BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    metrics::describe_counter!(TRANSACTIONS, "Number of approved charges by currency");
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Monotonic count of approved charges per currency.
///
/// Safe to share across handlers; increments are atomic adds.
#[derive(Debug, Default)]
pub struct TransactionCounter {
    by_currency: DashMap<String, AtomicU64>,
}

impl TransactionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one approved charge in `currency`.
    pub fn record(&self, currency: &str) {
        match self.by_currency.get(currency) {
            Some(count) => {
                count.fetch_add(1, Ordering::Relaxed);
            }
            None => {
                self.by_currency
                    .entry(currency.to_string())
                    .or_default()
                    .fetch_add(1, Ordering::Relaxed);
            }
        }

        metrics::counter!(TRANSACTIONS, CURRENCY_LABEL => currency.to_string()).increment(1);
    }

    /// Approved charges recorded so far in `currency`.
    pub fn get(&self, currency: &str) -> u64 {
        self.by_currency
            .get(currency)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Approved charges across all currencies.
    pub fn total(&self) -> u64 {
        self.by_currency
            .iter()
            .map(|c| c.value().load(Ordering::Relaxed))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_counts_per_currency() {
        let counter = TransactionCounter::new();
        counter.record("USD");
        counter.record("USD");
        counter.record("EUR");

        assert_eq!(counter.get("USD"), 2);
        assert_eq!(counter.get("EUR"), 1);
        assert_eq!(counter.get("JPY"), 0);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn test_concurrent_increments() {
        let counter = Arc::new(TransactionCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let counter = counter.clone();
                std::thread::spawn(move || {
                    let currency = if i % 2 == 0 { "USD" } else { "CAD" };
                    for _ in 0..1_000 {
                        counter.record(currency);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(counter.get("USD"), 4_000);
        assert_eq!(counter.get("CAD"), 4_000);
    }
}
