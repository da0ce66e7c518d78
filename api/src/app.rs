use std::net::SocketAddr;

use axum::Router;
use messages_core::create_repositories;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    config::{Config, Environment},
    http::{app_router, server::{ApiError, AppState}},
    telemetry::{self, Telemetry},
};

pub struct App {
    router: Router,
    listener: TcpListener,
    telemetry: Option<Telemetry>,
}

impl App {
    /// Wires repositories, service and routes, then binds the listener.
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let repositories = create_repositories()
            .await
            .map_err(|e| ApiError::Startup(e.to_string()))?;
        let state = AppState::from(repositories);

        let (router, api) = app_router(state);
        if config.environment == Environment::Development {
            for path in api.paths.paths.keys() {
                info!(path = %path, "route registered");
            }
        }

        let router = router
            .merge(Scalar::with_url("/scalar", api))
            .layer(TraceLayer::new_for_http().make_span_with(telemetry::request_span));

        let address = config.server.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| ApiError::Startup(format!("cannot bind {address}: {e}")))?;

        Ok(Self {
            router,
            listener,
            telemetry: None,
        })
    }

    /// Tracer provider to flush once the server has stopped.
    pub fn with_telemetry(mut self, telemetry: Option<Telemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ApiError> {
        self.listener
            .local_addr()
            .map_err(|e| ApiError::Startup(e.to_string()))
    }

    /// Serves requests until SIGINT or SIGTERM, then drains in-flight requests.
    pub async fn start(self) -> Result<(), ApiError> {
        info!(address = %self.local_addr()?, "Starting HTTP server");

        let served = axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;
        info!("HTTP server stopped");

        if let Some(telemetry) = self.telemetry {
            telemetry.shutdown();
        }

        served.map_err(|e| ApiError::Startup(e.to_string()))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
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

    info!("Stopping HTTP server");
}
