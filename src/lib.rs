//! Payment Service Library

pub mod config;
pub mod http;
pub mod observability;
pub mod payments;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use payments::{ChargeError, ChargeRequest, ChargeResponse, PaymentHandler};
