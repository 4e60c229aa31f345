//! Charge request and response types.
//!
//! Field names follow the RPC message layout, so the JSON wire form is
//! camelCase (`creditCard.creditCardNumber`, `amount.currencyCode`, ...).

use serde::{Deserialize, Serialize};

/// Represents an amount of money with its currency type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// The 3-letter ISO 4217 currency code.
    pub currency_code: String,
    /// Whole units of the amount.
    pub units: i64,
    /// Nano (10^-9) units of the amount, 0..=999_999_999.
    #[serde(default)]
    pub nanos: i32,
}

impl Money {
    /// The amount as a single floating point number (`units + nanos / 1e9`).
    pub fn as_f64(&self) -> f64 {
        self.units as f64 + f64::from(self.nanos) / 1_000_000_000.0
    }
}

/// Card details supplied by the caller.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInfo {
    pub credit_card_number: String,
    #[serde(default)]
    pub credit_card_cvv: i32,
    pub credit_card_expiration_year: i32,
    pub credit_card_expiration_month: i32,
}

impl CreditCardInfo {
    /// Last four characters of the card number, as printed on receipts.
    pub fn last_four(&self) -> &str {
        let number = self.credit_card_number.as_str();
        let start = number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &number[start..]
    }
}

// Keeps the full card number and CVV out of `{:?}` output.
impl std::fmt::Debug for CreditCardInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCardInfo")
            .field("credit_card_number", &format_args!("****{}", self.last_four()))
            .field("credit_card_expiration_year", &self.credit_card_expiration_year)
            .field("credit_card_expiration_month", &self.credit_card_expiration_month)
            .finish_non_exhaustive()
    }
}

/// Request payload for the `Charge` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    pub amount: Money,
    pub credit_card: CreditCardInfo,
}

impl ChargeRequest {
    /// Redacted view of the request, safe to attach to logs and span events.
    pub fn summary(&self) -> String {
        format!(
            "card=****{} exp={}/{} amount={} {}.{:09}",
            self.credit_card.last_four(),
            self.credit_card.credit_card_expiration_month,
            self.credit_card.credit_card_expiration_year,
            self.amount.currency_code,
            self.amount.units,
            self.amount.nanos,
        )
    }
}

/// Response payload for a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResponse {
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ChargeRequest {
        ChargeRequest {
            amount: Money {
                currency_code: "USD".to_string(),
                units: 10,
                nanos: 500_000_000,
            },
            credit_card: CreditCardInfo {
                credit_card_number: "4111111111111111".to_string(),
                credit_card_cvv: 123,
                credit_card_expiration_year: 2030,
                credit_card_expiration_month: 1,
            },
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{
            "amount": {"currencyCode": "EUR", "units": 3, "nanos": 250000000},
            "creditCard": {
                "creditCardNumber": "5555555555554444",
                "creditCardExpirationYear": 2031,
                "creditCardExpirationMonth": 12
            }
        }"#;
        let decoded: ChargeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.amount.currency_code, "EUR");
        assert_eq!(decoded.credit_card.credit_card_cvv, 0);
        assert_eq!(decoded.credit_card.credit_card_expiration_month, 12);

        let response = ChargeResponse {
            transaction_id: "abc".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"transactionId":"abc"}"#
        );
    }

    #[test]
    fn test_amount_as_f64() {
        assert_eq!(request().amount.as_f64(), 10.5);
    }

    #[test]
    fn test_last_four() {
        let mut card = request().credit_card;
        assert_eq!(card.last_four(), "1111");
        card.credit_card_number = "12".to_string();
        assert_eq!(card.last_four(), "12");
    }

    #[test]
    fn test_redaction() {
        let req = request();
        let debug = format!("{:?}", req);
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123"));
        assert!(debug.contains("****1111"));

        let summary = req.summary();
        assert!(!summary.contains("4111111111111111"));
        assert_eq!(summary, "card=****1111 exp=1/2030 amount=USD 10.500000000");
    }
}
