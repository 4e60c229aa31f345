//! Shared utilities for integration and load testing.

use payment_service::config::ServiceConfig;
use payment_service::http::HttpServer;
use payment_service::observability::TransactionCounter;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A payment service running on an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub transactions: Arc<TransactionCounter>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn charge_url(&self) -> String {
        self.url("/oteldemo.PaymentService/Charge")
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Start the service on 127.0.0.1 with a random port.
pub async fn start_service() -> TestService {
    let mut config = ServiceConfig::default();
    config.observability.metrics_enabled = false;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    let transactions = server.transactions();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = server
            .run_until(listener, async {
                let _ = rx.await;
            })
            .await;
    });

    TestService {
        addr,
        transactions,
        shutdown: Some(tx),
    }
}

/// JSON body for a `Charge` call.
pub fn charge_body(number: &str, month: i32, year: i32, currency: &str) -> Value {
    json!({
        "amount": { "currencyCode": currency, "units": 10, "nanos": 0 },
        "creditCard": {
            "creditCardNumber": number,
            "creditCardCvv": 672,
            "creditCardExpirationYear": year,
            "creditCardExpirationMonth": month
        }
    })
}
