use crate::analytics::{self, GeneratedReport, MetricCard, ReportKind};
use crate::model::{Camera, CameraStatus, Incident, IncidentStatus, Location, LocationStatus, Severity};
use crate::session::ConsoleSummary;
use crate::store::{facets, FilterQuery};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::server::ServerState;

#[derive(Debug, Deserialize, Default)]
pub struct CameraQuery {
    pub search: Option<String>,
    pub status: Option<CameraStatus>,
    pub location: Option<String>,
    pub resolution: Option<String>,
}

impl CameraQuery {
    fn to_filter(&self) -> FilterQuery {
        let mut query = FilterQuery::new();
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(status) = self.status {
            query = query.with_facet(facets::STATUS, status.as_str());
        }
        if let Some(location) = &self.location {
            query = query.with_facet(facets::LOCATION, location.clone());
        }
        if let Some(resolution) = &self.resolution {
            query = query.with_facet(facets::RESOLUTION, resolution.clone());
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct CameraListResponse {
    pub total: usize,
    pub online: usize,
    pub cameras: Vec<Camera>,
}

/// Handler for the filterable camera list
pub async fn list_cameras(
    State(state): State<ServerState>,
    Query(params): Query<CameraQuery>,
) -> Json<CameraListResponse> {
    let console = state.console.read();
    let summary = analytics::camera_summary(console.cameras());
    let cameras: Vec<Camera> = console
        .cameras()
        .filter(&params.to_filter())
        .into_iter()
        .cloned()
        .collect();

    Json(CameraListResponse {
        total: summary.total,
        online: summary.online,
        cameras,
    })
}

/// Handler for a single camera lookup
pub async fn get_camera(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    let console = state.console.read();
    match console.cameras().get(&id) {
        Some(camera) => Json(camera.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("camera {} not found", id) })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct IncidentQuery {
    pub search: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<IncidentStatus>,
}

impl IncidentQuery {
    fn to_filter(&self) -> FilterQuery {
        let mut query = FilterQuery::new();
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(severity) = self.severity {
            query = query.with_facet(facets::SEVERITY, severity.as_str());
        }
        if let Some(status) = self.status {
            query = query.with_facet(facets::STATUS, status.as_str());
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct IncidentListResponse {
    pub total: usize,
    pub incidents: Vec<Incident>,
}

/// Handler for the filterable incident list
pub async fn list_incidents(
    State(state): State<ServerState>,
    Query(params): Query<IncidentQuery>,
) -> Json<IncidentListResponse> {
    let console = state.console.read();
    let incidents: Vec<Incident> = console
        .incidents()
        .filter(&params.to_filter())
        .into_iter()
        .cloned()
        .collect();

    Json(IncidentListResponse {
        total: incidents.len(),
        incidents,
    })
}

/// Handler for opening a manually reported incident
pub async fn create_incident(State(state): State<ServerState>) -> impl IntoResponse {
    let incident = state.console.write().create_incident();
    info!(incident = %incident.id, "incident created via API");
    (StatusCode::CREATED, Json(incident))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: IncidentStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub id: String,
    pub updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident: Option<Incident>,
}

/// Handler for incident status updates
///
/// An unknown identifier reports `updated: false`; the store mutation
/// itself stays a silent no-op.
pub async fn update_incident_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Json<StatusUpdateResponse> {
    let mut console = state.console.write();
    let updated = console.update_incident_status(&id, request.status);
    let incident = console.incidents().get(&id).cloned();

    Json(StatusUpdateResponse { id, updated, incident })
}

#[derive(Debug, Deserialize, Default)]
pub struct LocationQuery {
    pub search: Option<String>,
    pub status: Option<LocationStatus>,
}

impl LocationQuery {
    fn to_filter(&self) -> FilterQuery {
        let mut query = FilterQuery::new();
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(status) = self.status {
            query = query.with_facet(facets::STATUS, status.as_str());
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub total: usize,
    pub locations: Vec<Location>,
}

/// Handler for the filterable location list
pub async fn list_locations(
    State(state): State<ServerState>,
    Query(params): Query<LocationQuery>,
) -> Json<LocationListResponse> {
    let console = state.console.read();
    let locations: Vec<Location> = console
        .locations()
        .filter(&params.to_filter())
        .into_iter()
        .cloned()
        .collect();

    Json(LocationListResponse {
        total: locations.len(),
        locations,
    })
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub cards: Vec<MetricCard>,
    pub summary: ConsoleSummary,
    pub activity: Vec<analytics::ActivityItem>,
}

/// Handler for the overview dashboard metrics
pub async fn metrics_handler(State(state): State<ServerState>) -> Json<MetricsResponse> {
    let console = state.console.read();
    let mut activity = analytics::recent_activity();
    activity.truncate(console.activity_limit());

    Json(MetricsResponse {
        cards: analytics::metric_cards(),
        summary: console.summary(),
        activity,
    })
}

/// Handler for the analytics panel series
pub async fn analytics_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "weekly_trend": analytics::weekly_trend(),
        "incident_distribution": analytics::incident_distribution(),
        "weekly_alerts": analytics::weekly_alerts(),
        "hourly_traffic": analytics::hourly_traffic(),
        "revenue_protection": analytics::revenue_protection(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
}

/// Handler for report generation
pub async fn report_handler(
    State(state): State<ServerState>,
    Json(request): Json<ReportRequest>,
) -> impl IntoResponse {
    let report = state.console.write().generate_report(request.kind);
    (StatusCode::CREATED, Json(report))
}

/// Handler for the session's generated reports
pub async fn list_reports(State(state): State<ServerState>) -> Json<Vec<GeneratedReport>> {
    Json(state.console.read().reports().to_vec())
}

/// Handler for the refresh action
pub async fn refresh_handler(State(state): State<ServerState>) -> Json<ConsoleSummary> {
    Json(state.console.read().refresh())
}

/// Handler for health check endpoint
pub async fn health_handler(State(state): State<ServerState>) -> impl IntoResponse {
    let console = state.console.read();

    let health_info = serde_json::json!({
        "status": "healthy",
        "stores": {
            "cameras": console.cameras().len(),
            "incidents": console.incidents().len(),
            "locations": console.locations().len(),
        },
        "server_info": {
            "subscribers": state.event_bus.subscriber_count(),
        }
    });

    (StatusCode::OK, Json(health_info))
}

/// Minimal HTML overview page for browsers hitting the root
pub async fn overview_page(State(state): State<ServerState>) -> impl IntoResponse {
    let console = state.console.read();
    let summary = console.summary();

    let mut cards = String::new();
    for card in analytics::metric_cards() {
        cards.push_str(&format!(
            r#"<div class="card"><p class="title">{}</p><p class="value">{}</p><p class="change">{} from last week</p></div>"#,
            card.title, card.value, card.change
        ));
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>SecureLink Operations Center</title>
    <style>
        :root {{ color-scheme: dark; }}
        body {{
            margin: 0;
            padding: 2rem;
            background: #0b0f17;
            color: #e6e9ef;
            font-family: system-ui, sans-serif;
        }}
        .cards {{ display: flex; gap: 1rem; flex-wrap: wrap; }}
        .card {{
            background: #151b26;
            border: 1px solid #263042;
            border-radius: 8px;
            padding: 1rem 1.5rem;
            min-width: 12rem;
        }}
        .card .title {{ margin: 0; color: #8b94a7; font-size: 0.85rem; }}
        .card .value {{ margin: 0.25rem 0; font-size: 1.6rem; font-weight: 700; }}
        .card .change {{ margin: 0; color: #8b94a7; font-size: 0.8rem; }}
    </style>
</head>
<body>
    <h1>Security Operations Center</h1>
    <p>{online} of {total} cameras online, {open} open incidents, {locations} locations monitored.</p>
    <div class="cards">{cards}</div>
    <p>JSON API under <code>/api</code>, liveness under <code>/health</code>.</p>
</body>
</html>
"#,
        online = summary.cameras.online,
        total = summary.cameras.total,
        open = summary.incidents.open,
        locations = summary.locations.locations,
        cards = cards,
    );

    Html(html)
}
