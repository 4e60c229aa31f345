use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::server::AppState;
use crate::observability::tracing::{TelemetryContext, BAGGAGE_HEADER};
use crate::payments::{ChargeError, ChargeRequest, ChargeResponse};

/// Route for the `Charge` RPC.
pub const CHARGE_PATH: &str = "/oteldemo.PaymentService/Charge";

/// Route for the health responder.
pub const HEALTH_PATH: &str = "/health";

/// Error body returned for a rejected charge.
#[derive(Debug, Serialize)]
pub struct RpcErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ChargeError {
    fn into_response(self) -> Response {
        let body = RpcErrorBody {
            code: "INVALID_ARGUMENT",
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub async fn charge(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChargeRequest>,
) -> Result<Json<ChargeResponse>, ChargeError> {
    let baggage = headers.get(BAGGAGE_HEADER).and_then(|v| v.to_str().ok());
    let ctx = TelemetryContext::from_baggage(baggage);

    state.payments.handle(&request, &ctx).map(Json)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "SERVING" }))
}
