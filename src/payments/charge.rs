//! Core charge validation.
//!
//! `charge` is a pure function of the request and the current month; the
//! only nondeterminism is the generated transaction id. `Charger` binds it
//! to a [`Clock`] so callers don't have to pass the date around.

use chrono::Datelike;
use uuid::Uuid;

use crate::payments::card::{CardDetails, CardType};
use crate::payments::error::{ChargeError, ChargeResult};
use crate::payments::types::ChargeRequest;

/// A calendar month, used for expiration checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: i32,
}

impl YearMonth {
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// Months elapsed since year 0, for ordering comparisons.
    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

/// Source of the current month.
pub trait Clock: Send + Sync {
    fn today(&self) -> YearMonth;
}

/// Reads the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> YearMonth {
        let now = chrono::Local::now();
        YearMonth::new(now.year(), now.month() as i32)
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub YearMonth);

impl Clock for FixedClock {
    fn today(&self) -> YearMonth {
        self.0
    }
}

/// An approved charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charged {
    pub transaction_id: String,
    pub card: CardDetails,
}

impl Charged {
    pub fn card_type(&self) -> CardType {
        self.card.card_type
    }
}

/// Validate the card on `request` and approve the charge.
///
/// Checks run in order and stop at the first failure:
/// card validity, accepted card type, expiration. A card expiring in
/// `today`'s month is still accepted.
pub fn charge(request: &ChargeRequest, today: YearMonth) -> ChargeResult<Charged> {
    let card_info = &request.credit_card;
    let card = CardDetails::from_number(&card_info.credit_card_number);

    if !card.valid {
        return Err(ChargeError::InvalidCard);
    }

    if !card.card_type.is_accepted() {
        return Err(ChargeError::UnsupportedCardType {
            card_type: card.card_type,
        });
    }

    let expiration = YearMonth::new(
        card_info.credit_card_expiration_year,
        card_info.credit_card_expiration_month,
    );
    if today.ordinal() > expiration.ordinal() {
        return Err(ChargeError::ExpiredCard {
            last_four: card_info.last_four().to_string(),
            month: expiration.month,
            year: expiration.year,
        });
    }

    Ok(Charged {
        transaction_id: Uuid::new_v4().to_string(),
        card,
    })
}

/// Charge validation bound to a clock.
#[derive(Debug, Clone, Default)]
pub struct Charger<C = SystemClock> {
    clock: C,
}

impl<C: Clock> Charger<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Run [`charge`] against the clock's current month.
    pub fn charge(&self, request: &ChargeRequest) -> ChargeResult<Charged> {
        charge(request, self.clock.today())
    }
}
