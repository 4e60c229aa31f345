//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Charge handler produces:
//!     → tracing.rs (handler span + attributes, caller baggage)
//!     → metrics.rs (transaction counter)
//!     → logging.rs (structured events, subscriber setup)
//!
//! Consumers:
//!     → Log aggregation (stdout, text or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
pub mod tracing;

pub use self::metrics::TransactionCounter;
pub use self::tracing::TelemetryContext;
