use crate::analytics::{
    self, CameraSummary, GeneratedReport, IncidentSummary, LocationSummary, ReportKind,
};
use crate::config::SecurelinkConfig;
use crate::events::{EventBus, OpsEvent};
use crate::model::{Camera, Incident, IncidentStatus, Location};
use crate::seed;
use crate::store::{EntityStore, Selection};
use crate::view::{ActiveView, GridLayout, ViewState};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

/// Point-in-time summaries across all three stores
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConsoleSummary {
    pub incidents: IncidentSummary,
    pub cameras: CameraSummary,
    pub locations: LocationSummary,
}

/// One operator session of the operations console
///
/// Owns the entity stores, the per-view selections, and the shell view
/// state. Every operation is synchronous and fully applied before it
/// returns; none of them can fail. State lives for the session only and
/// resets to the seed data on restart.
pub struct OpsConsole {
    cameras: EntityStore<Camera>,
    incidents: EntityStore<Incident>,
    locations: EntityStore<Location>,
    camera_selection: Selection,
    incident_selection: Selection,
    view: ViewState,
    activity_limit: usize,
    reports: Vec<GeneratedReport>,
    event_bus: Arc<EventBus>,
}

impl OpsConsole {
    /// Create a console seeded with the static entity data
    pub fn new(config: &SecurelinkConfig, event_bus: Arc<EventBus>) -> Self {
        let console = Self {
            cameras: EntityStore::from_records(seed::cameras()),
            incidents: EntityStore::from_records(seed::incidents()),
            locations: EntityStore::from_records(seed::locations()),
            camera_selection: Selection::default(),
            incident_selection: Selection::default(),
            view: ViewState::new(config.initial_view(), config.initial_grid_layout()),
            activity_limit: config.dashboard.activity_limit,
            reports: Vec::new(),
            event_bus,
        };
        info!(
            cameras = console.cameras.len(),
            incidents = console.incidents.len(),
            locations = console.locations.len(),
            "console session started"
        );
        console
    }

    pub fn cameras(&self) -> &EntityStore<Camera> {
        &self.cameras
    }

    pub fn incidents(&self) -> &EntityStore<Incident> {
        &self.incidents
    }

    pub fn locations(&self) -> &EntityStore<Location> {
        &self.locations
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn reports(&self) -> &[GeneratedReport] {
        &self.reports
    }

    pub fn activity_limit(&self) -> usize {
        self.activity_limit
    }

    /// Switch the active view
    ///
    /// Leaving a view tears down its detail panel, so both selections
    /// are cleared on an actual change.
    pub fn activate_view(&mut self, view: ActiveView) {
        if self.view.activate(view) {
            self.camera_selection.clear();
            self.incident_selection.clear();
            debug!(view = %view, "view activated");
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.view.toggle_sidebar();
    }

    pub fn set_grid_layout(&mut self, layout: GridLayout) {
        self.view.set_grid_layout(layout);
    }

    /// Focus a camera for the details panel
    ///
    /// Unknown identifiers are accepted and simply resolve to nothing.
    pub fn select_camera<S: Into<String>>(&mut self, id: S) {
        self.camera_selection.select(id);
    }

    pub fn selected_camera(&self) -> Option<&Camera> {
        self.camera_selection.resolve(&self.cameras)
    }

    pub fn select_incident<S: Into<String>>(&mut self, id: S) {
        self.incident_selection.select(id);
    }

    pub fn selected_incident(&self) -> Option<&Incident> {
        self.incident_selection.resolve(&self.incidents)
    }

    /// Replace an incident's workflow status
    ///
    /// A missing identifier is a silent no-op and publishes nothing.
    pub fn update_incident_status(&mut self, id: &str, status: IncidentStatus) -> bool {
        let updated = self.incidents.update_status(id, status);
        if updated {
            self.notify(OpsEvent::IncidentStatusChanged {
                incident_id: id.to_string(),
                status,
                timestamp: SystemTime::now(),
            });
        }
        updated
    }

    /// Open a manually reported incident and focus it
    pub fn create_incident(&mut self) -> Incident {
        let time = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let incident = self.incidents.open_manual_incident(time);
        self.incident_selection.select(&incident.id);
        self.notify(OpsEvent::IncidentCreated {
            incident_id: incident.id.clone(),
            timestamp: SystemTime::now(),
        });
        incident
    }

    /// Re-announce the current state of the console
    pub fn refresh(&self) -> ConsoleSummary {
        self.notify(OpsEvent::DataRefreshed {
            timestamp: SystemTime::now(),
        });
        self.summary()
    }

    pub fn summary(&self) -> ConsoleSummary {
        ConsoleSummary {
            incidents: analytics::incident_summary(&self.incidents),
            cameras: analytics::camera_summary(&self.cameras),
            locations: analytics::location_summary(&self.locations),
        }
    }

    /// Generate a report and keep its record for the session
    pub fn generate_report(&mut self, kind: ReportKind) -> GeneratedReport {
        let report = analytics::generate_report(kind);
        self.notify(OpsEvent::ReportGenerated {
            report_id: report.id.clone(),
            kind: report.title.clone(),
            timestamp: SystemTime::now(),
        });
        self.reports.insert(0, report.clone());
        report
    }

    // Notifications are best-effort; a bus without subscribers is normal
    // during tests and headless runs.
    fn notify(&self, event: OpsEvent) {
        if let Err(e) = self.event_bus.publish(event) {
            debug!("notification dropped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventFilter;

    fn test_console() -> OpsConsole {
        let config = SecurelinkConfig::default();
        OpsConsole::new(&config, Arc::new(EventBus::new(16)))
    }

    #[test]
    fn test_console_seeds_all_stores() {
        let console = test_console();
        assert_eq!(console.cameras().len(), 9);
        assert_eq!(console.incidents().len(), 4);
        assert_eq!(console.locations().len(), 4);
        assert_eq!(console.view().active(), ActiveView::Dashboard);
    }

    #[test]
    fn test_view_change_clears_selections() {
        let mut console = test_console();
        console.select_camera("cam-001");
        console.select_incident("INC-001");
        assert!(console.selected_camera().is_some());

        console.activate_view(ActiveView::Incidents);
        assert!(console.selected_camera().is_none());
        assert!(console.selected_incident().is_none());

        // Re-activating the same view is not a teardown
        console.select_incident("INC-002");
        console.activate_view(ActiveView::Incidents);
        assert!(console.selected_incident().is_some());
    }

    #[test]
    fn test_selecting_unknown_id_yields_no_details() {
        let mut console = test_console();
        console.select_incident("INC-999");
        assert!(console.selected_incident().is_none());
    }

    #[tokio::test]
    async fn test_status_update_publishes_event() {
        let bus = Arc::new(EventBus::new(16));
        let config = SecurelinkConfig::default();
        let mut console = OpsConsole::new(&config, Arc::clone(&bus));
        let mut receiver = crate::events::EventReceiver::new(
            bus.subscribe(),
            EventFilter::EventTypes(vec!["incident_status_changed"]),
            "test".to_string(),
        );

        assert!(console.update_incident_status("INC-002", IncidentStatus::Resolved));

        let event = receiver.try_recv().unwrap().expect("event published");
        match event {
            OpsEvent::IncidentStatusChanged {
                incident_id,
                status,
                ..
            } => {
                assert_eq!(incident_id, "INC-002");
                assert_eq!(status, IncidentStatus::Resolved);
            }
            _ => panic!("unexpected event"),
        }
    }

    #[tokio::test]
    async fn test_missing_id_update_publishes_nothing() {
        let bus = Arc::new(EventBus::new(16));
        let config = SecurelinkConfig::default();
        let mut console = OpsConsole::new(&config, Arc::clone(&bus));
        let mut receiver =
            crate::events::EventReceiver::new(bus.subscribe(), EventFilter::All, "test".to_string());

        assert!(!console.update_incident_status("INC-999", IncidentStatus::Resolved));
        assert!(receiver.try_recv().unwrap().is_none());
    }

    #[test]
    fn test_create_incident_selects_new_record() {
        let mut console = test_console();
        let created = console.create_incident();

        assert_eq!(console.incidents().len(), 5);
        assert_eq!(created.id, "INC-005");
        assert_eq!(console.selected_incident().unwrap().id, "INC-005");
        assert_eq!(console.incidents().records()[0].id, "INC-005");
    }

    #[test]
    fn test_refresh_returns_live_summary() {
        let mut console = test_console();
        let before = console.refresh();
        assert_eq!(before.incidents.open, 1);

        console.create_incident();
        let after = console.refresh();
        assert_eq!(after.incidents.open, 2);
    }

    #[test]
    fn test_generated_reports_accumulate_newest_first() {
        let mut console = test_console();
        let first = console.generate_report(ReportKind::DailySummary);
        let second = console.generate_report(ReportKind::Compliance);

        assert_eq!(console.reports().len(), 2);
        assert_eq!(console.reports()[0].id, second.id);
        assert_ne!(first.id, second.id);
    }
}
