pub mod analytics;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

#[cfg(feature = "api")]
pub mod api;

pub use analytics::{
    CameraSummary, GeneratedReport, IncidentSummary, LocationSummary, MetricCard, ReportKind,
};
pub use config::SecurelinkConfig;
pub use error::{EventBusError, Result, SecurelinkError};
pub use events::{spawn_notification_log, EventBus, EventFilter, EventReceiver, OpsEvent};
pub use model::{
    Camera, CameraStatus, Incident, IncidentStatus, Location, LocationStatus, Severity, StatusTone,
};
pub use session::{ConsoleSummary, OpsConsole};
pub use store::{filter, EntityStore, Faceted, FilterQuery, Record, Searchable, Selection};
pub use view::{navigation, ActiveView, GridLayout, NavEntry, ViewState};

#[cfg(feature = "api")]
pub use api::{ApiServer, ApiServerBuilder};

#[cfg(feature = "api")]
pub use error::ApiError;
