//! Instrumented `Charge` handler.
//!
//! Wraps [`Charger`] in the `chargeServiceHandler` span: records the
//! amount up front, card details and `charged` on success, the exception
//! on failure, and bumps the transaction counter for approved charges.
//! Errors are returned unchanged.

use std::sync::Arc;

use crate::observability::metrics::TransactionCounter;
use crate::observability::tracing::{charge_span, TelemetryContext};
use crate::payments::charge::{Charger, Clock, SystemClock};
use crate::payments::error::ChargeResult;
use crate::payments::types::{ChargeRequest, ChargeResponse};

/// Handles `Charge` calls. Cheap to clone; clones share the counter.
#[derive(Debug, Clone)]
pub struct PaymentHandler<C = SystemClock> {
    charger: Charger<C>,
    transactions: Arc<TransactionCounter>,
}

impl PaymentHandler<SystemClock> {
    /// Handler using the wall clock.
    pub fn new(transactions: Arc<TransactionCounter>) -> Self {
        Self::with_clock(SystemClock, transactions)
    }
}

impl<C: Clock> PaymentHandler<C> {
    pub fn with_clock(clock: C, transactions: Arc<TransactionCounter>) -> Self {
        Self {
            charger: Charger::new(clock),
            transactions,
        }
    }

    /// Transaction counter shared by this handler.
    pub fn transactions(&self) -> &Arc<TransactionCounter> {
        &self.transactions
    }

    /// Validate and charge `request`.
    ///
    /// Runs entirely inside the handler span; no await points.
    pub fn handle(
        &self,
        request: &ChargeRequest,
        ctx: &TelemetryContext,
    ) -> ChargeResult<ChargeResponse> {
        let span = charge_span();
        let _entered = span.enter();

        span.record("payment.amount", request.amount.as_f64());
        tracing::info!(request = %request.summary(), "Charge request received.");

        match self.charger.charge(request) {
            Ok(charged) => {
                let card_type = charged.card_type();
                span.record("payment.card_type", card_type.as_str());
                span.record("payment.card_valid", charged.card.valid);
                span.record("payment.charged", !ctx.synthetic_request);
                span.record("otel.status_code", "OK");

                let amount = &request.amount;
                tracing::info!(
                    transaction_id = %charged.transaction_id,
                    card_type = %card_type,
                    last_four_digits = %request.credit_card.last_four(),
                    amount.units = amount.units,
                    amount.nanos = amount.nanos,
                    amount.currency_code = %amount.currency_code,
                    "Transaction complete."
                );
                self.transactions.record(&amount.currency_code);

                Ok(ChargeResponse {
                    transaction_id: charged.transaction_id,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Charge request error.");
                span.record("exception.kind", e.kind());
                span.record("exception.message", e.to_string().as_str());
                span.record("otel.status_code", "ERROR");
                Err(e)
            }
        }
    }
}
