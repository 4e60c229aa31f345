//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace layer)
//!     → charge.rs (decode JSON, read baggage, call PaymentHandler)
//!     → ChargeResponse | RPC error body
//! ```

pub mod charge;
pub mod server;

pub use server::HttpServer;
