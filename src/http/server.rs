//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the charge and health handlers
//! - Wire up middleware (request tracing)
//! - Bind server to listener and shut down gracefully on SIGINT/SIGTERM

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::charge::{charge, health, CHARGE_PATH, HEALTH_PATH};
use crate::observability::TransactionCounter;
use crate::payments::PaymentHandler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub payments: PaymentHandler,
}

/// HTTP server exposing the payment service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    transactions: Arc<TransactionCounter>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let transactions = Arc::new(TransactionCounter::new());
        let state = AppState {
            payments: PaymentHandler::new(transactions.clone()),
        };

        let router = Self::build_router(state);
        Self {
            router,
            config,
            transactions,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(CHARGE_PATH, post(charge))
            .route(HEALTH_PATH, get(health))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until SIGINT or SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` resolves, then drain in-flight calls.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.config.observability.service_name,
            "Payment service starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!(
            transactions = self.transactions.total(),
            "Payment service stopped"
        );
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Counter of approved charges served by this server.
    pub fn transactions(&self) -> Arc<TransactionCounter> {
        self.transactions.clone()
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
