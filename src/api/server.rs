use crate::{
    config::ApiConfig,
    error::{ApiError, Result, SecurelinkError},
    events::EventBus,
    session::OpsConsole,
};
use axum::{
    routing::{get, patch, post},
    Router,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{
    analytics_handler, create_incident, get_camera, health_handler, list_cameras, list_incidents,
    list_locations, list_reports, metrics_handler, overview_page, refresh_handler,
    report_handler, update_incident_status,
};

/// Shared state for the Axum server
#[derive(Clone)]
pub struct ServerState {
    pub(crate) console: Arc<RwLock<OpsConsole>>,
    pub(crate) event_bus: Arc<EventBus>,
}

/// Build the console router over the shared state
pub(crate) fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(overview_page))
        .route("/health", get(health_handler))
        .route("/api/cameras", get(list_cameras))
        .route("/api/cameras/:id", get(get_camera))
        .route("/api/incidents", get(list_incidents).post(create_incident))
        .route("/api/incidents/:id/status", patch(update_incident_status))
        .route("/api/locations", get(list_locations))
        .route("/api/metrics", get(metrics_handler))
        .route("/api/analytics", get(analytics_handler))
        .route("/api/reports", get(list_reports).post(report_handler))
        .route("/api/refresh", post(refresh_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server exposing the console to rendering layers
pub struct ApiServer {
    pub(crate) config: ApiConfig,
    pub(crate) console: Arc<RwLock<OpsConsole>>,
    pub(crate) event_bus: Arc<EventBus>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(
        config: ApiConfig,
        console: Arc<RwLock<OpsConsole>>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            config,
            console,
            event_bus,
        }
    }

    /// Bind the listener and serve until the process exits
    pub async fn start(&self) -> Result<()> {
        let state = ServerState {
            console: Arc::clone(&self.console),
            event_bus: Arc::clone(&self.event_bus),
        };

        let app = router(state);
        let addr = format!("{}:{}", self.config.ip, self.config.port);

        info!("Starting console API server on {}", addr);

        let listener =
            tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|e| ApiError::BindFailed {
                    address: addr.clone(),
                    source: e,
                })?;

        info!("Console API listening on {}", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::StartupFailed {
                details: format!("Server error: {}", e),
            })?;

        Ok(())
    }
}

/// API server builder for configuration
pub struct ApiServerBuilder {
    config: Option<ApiConfig>,
    console: Option<Arc<RwLock<OpsConsole>>>,
    event_bus: Option<Arc<EventBus>>,
}

impl ApiServerBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            console: None,
            event_bus: None,
        }
    }

    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the shared console
    pub fn console(mut self, console: Arc<RwLock<OpsConsole>>) -> Self {
        self.console = Some(console);
        self
    }

    /// Set the event bus
    pub fn event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Build the API server
    pub fn build(self) -> Result<ApiServer> {
        let config = self.config.ok_or_else(|| {
            SecurelinkError::Api(ApiError::StartupFailed {
                details: "API configuration is required".to_string(),
            })
        })?;

        let console = self.console.ok_or_else(|| {
            SecurelinkError::Api(ApiError::StartupFailed {
                details: "Console is required".to_string(),
            })
        })?;

        let event_bus = self.event_bus.ok_or_else(|| {
            SecurelinkError::Api(ApiError::StartupFailed {
                details: "Event bus is required".to_string(),
            })
        })?;

        Ok(ApiServer::new(config, console, event_bus))
    }
}

impl Default for ApiServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
