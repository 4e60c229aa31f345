//! Payment charging subsystem.
//!
//! # Data Flow
//! ```text
//! ChargeRequest
//!     → handler.rs (span, events, counter)
//!     → charge.rs (validity → accepted type → expiration → transaction id)
//!         → card.rs (issuer, length, Luhn)
//!     → ChargeResponse | ChargeError
//! ```

pub mod card;
pub mod charge;
pub mod error;
pub mod handler;
pub mod types;

pub use card::{CardDetails, CardType};
pub use charge::{charge, Charged, Charger, Clock, FixedClock, SystemClock, YearMonth};
pub use error::{ChargeError, ChargeResult};
pub use handler::PaymentHandler;
pub use types::{ChargeRequest, ChargeResponse, CreditCardInfo, Money};
