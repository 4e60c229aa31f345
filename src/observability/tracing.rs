//! Trace context and span construction.
//!
//! # Responsibilities
//! - Extract the propagated telemetry context (W3C `baggage`) from callers
//! - Build the handler span with its attribute fields declared up front
//!
//! Attribute fields start as `Empty` and are recorded as the call
//! progresses, so every span carries the same field set.

use tracing::{field, info_span, Span};

/// Header carrying W3C baggage.
pub const BAGGAGE_HEADER: &str = "baggage";

/// Baggage entry marking a synthetic (probe/load-test) request.
pub const SYNTHETIC_REQUEST_KEY: &str = "synthetic_request";

/// Ambient context propagated by the caller for one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelemetryContext {
    pub synthetic_request: bool,
}

impl TelemetryContext {
    pub fn synthetic() -> Self {
        Self {
            synthetic_request: true,
        }
    }

    /// Build the context from a raw `baggage` header value.
    ///
    /// Only `synthetic_request=true` (exact value) marks the call synthetic.
    pub fn from_baggage(header: Option<&str>) -> Self {
        let synthetic_request = header
            .and_then(|h| baggage_entry(h, SYNTHETIC_REQUEST_KEY))
            .is_some_and(|v| v == "true");
        Self { synthetic_request }
    }
}

/// Look up `key` in a W3C baggage list (`k1=v1;prop,k2=v2`).
pub fn baggage_entry<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    header.split(',').find_map(|member| {
        let kv = member.split(';').next()?;
        let (k, v) = kv.split_once('=')?;
        if k.trim() == key {
            Some(v.trim())
        } else {
            None
        }
    })
}

/// Span covering one `Charge` call.
pub fn charge_span() -> Span {
    info_span!(
        "chargeServiceHandler",
        otel.kind = "server",
        rpc.system = "http_json",
        rpc.service = "oteldemo.PaymentService",
        rpc.method = "Charge",
        payment.amount = field::Empty,
        payment.card_type = field::Empty,
        payment.card_valid = field::Empty,
        payment.charged = field::Empty,
        otel.status_code = field::Empty,
        exception.kind = field::Empty,
        exception.message = field::Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baggage_entry() {
        let header = "userId=alice, synthetic_request = true ;ttl=10,region=eu";
        assert_eq!(baggage_entry(header, "synthetic_request"), Some("true"));
        assert_eq!(baggage_entry(header, "userId"), Some("alice"));
        assert_eq!(baggage_entry(header, "region"), Some("eu"));
        assert_eq!(baggage_entry(header, "missing"), None);
        assert_eq!(baggage_entry("garbage", "garbage"), None);
    }

    #[test]
    fn test_synthetic_flag() {
        assert!(TelemetryContext::from_baggage(Some("synthetic_request=true")).synthetic_request);
        assert!(!TelemetryContext::from_baggage(Some("synthetic_request=TRUE")).synthetic_request);
        assert!(!TelemetryContext::from_baggage(Some("synthetic_request=1")).synthetic_request);
        assert!(!TelemetryContext::from_baggage(Some("other=true")).synthetic_request);
        assert!(!TelemetryContext::from_baggage(None).synthetic_request);
        assert_eq!(TelemetryContext::default(), TelemetryContext::from_baggage(None));
    }
}
