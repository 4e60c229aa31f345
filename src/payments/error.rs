//! Charge failure taxonomy.

use thiserror::Error;

use crate::payments::card::CardType;

/// Reasons a charge is rejected. Every variant is fatal to the call and is
/// surfaced to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    /// Card number failed format, length or checksum validation.
    #[error("Credit card info is invalid.")]
    InvalidCard,

    /// Card type is valid but not one this service accepts.
    #[error("Sorry, we cannot process {card_type} credit cards. Only VISA or MasterCard is accepted.")]
    UnsupportedCardType { card_type: CardType },

    /// Card expiration month is before the current month.
    #[error("The credit card (ending {last_four}) expired on {month}/{year}.")]
    ExpiredCard {
        last_four: String,
        month: i32,
        year: i32,
    },
}

impl ChargeError {
    /// Stable name of the failure kind, used as the span `exception.kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            ChargeError::InvalidCard => "InvalidCardError",
            ChargeError::UnsupportedCardType { .. } => "UnsupportedCardTypeError",
            ChargeError::ExpiredCard { .. } => "ExpiredCardError",
        }
    }
}

/// Result type for charge operations.
pub type ChargeResult<T> = Result<T, ChargeError>;
