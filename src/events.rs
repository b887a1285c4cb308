use crate::error::EventBusError;
use crate::model::IncidentStatus;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Events that can occur in the operations console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OpsEvent {
    /// A new incident was opened by an operator
    IncidentCreated {
        incident_id: String,
        timestamp: SystemTime,
    },
    /// An incident's workflow status changed
    IncidentStatusChanged {
        incident_id: String,
        status: IncidentStatus,
        timestamp: SystemTime,
    },
    /// Console data was refreshed on operator request
    DataRefreshed { timestamp: SystemTime },
    /// A report was generated
    ReportGenerated {
        report_id: String,
        kind: String,
        timestamp: SystemTime,
    },
    /// A system error occurred in a component
    SystemError { component: String, error: String },
}

impl OpsEvent {
    /// Get the timestamp of the event
    pub fn timestamp(&self) -> SystemTime {
        match self {
            OpsEvent::IncidentCreated { timestamp, .. } => *timestamp,
            OpsEvent::IncidentStatusChanged { timestamp, .. } => *timestamp,
            OpsEvent::DataRefreshed { timestamp } => *timestamp,
            OpsEvent::ReportGenerated { timestamp, .. } => *timestamp,
            OpsEvent::SystemError { .. } => SystemTime::now(),
        }
    }

    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            OpsEvent::IncidentCreated { incident_id, .. } => {
                format!("Incident {} has been created", incident_id)
            }
            OpsEvent::IncidentStatusChanged {
                incident_id,
                status,
                ..
            } => {
                format!("Incident {} status changed to {}", incident_id, status)
            }
            OpsEvent::DataRefreshed { .. } => "Console data refreshed".to_string(),
            OpsEvent::ReportGenerated { kind, .. } => {
                format!("{} report generated", kind)
            }
            OpsEvent::SystemError { component, error } => {
                format!("Error in {}: {}", component, error)
            }
        }
    }

    /// Get the event type as a string for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            OpsEvent::IncidentCreated { .. } => "incident_created",
            OpsEvent::IncidentStatusChanged { .. } => "incident_status_changed",
            OpsEvent::DataRefreshed { .. } => "data_refreshed",
            OpsEvent::ReportGenerated { .. } => "report_generated",
            OpsEvent::SystemError { .. } => "system_error",
        }
    }
}

/// Broadcast event bus for component coordination
pub struct EventBus {
    sender: broadcast::Sender<OpsEvent>,
    debug_logging: bool,
}

impl EventBus {
    /// Create a new event bus with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            debug_logging: false,
        }
    }

    /// Create a new event bus with debug logging enabled
    pub fn with_debug_logging(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            debug_logging: true,
        }
    }

    /// Subscribe to events and get a receiver
    pub fn subscribe(&self) -> broadcast::Receiver<OpsEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of subscribers the event reached. Publishing
    /// with no subscribers is an error at this level; callers that treat
    /// notifications as best-effort downgrade it to a log line.
    pub fn publish(&self, event: OpsEvent) -> Result<usize, EventBusError> {
        if self.debug_logging {
            debug!("Publishing event: {}", event.description());
        }

        match &event {
            OpsEvent::IncidentCreated { incident_id, .. } => {
                info!(incident = %incident_id, "incident created");
            }
            OpsEvent::IncidentStatusChanged {
                incident_id,
                status,
                ..
            } => {
                info!(incident = %incident_id, status = %status, "incident status changed");
            }
            OpsEvent::SystemError { component, error } => {
                error!("System error in {}: {}", component, error);
            }
            _ => {
                if self.debug_logging {
                    debug!("Event: {}", event.description());
                }
            }
        }

        self.sender
            .send(event)
            .map_err(|e| EventBusError::PublishFailed {
                details: e.to_string(),
            })
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Check if there are any active subscribers
    pub fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            debug_logging: self.debug_logging,
        }
    }
}

/// Event filter for selective event handling
#[derive(Debug, Clone)]
pub enum EventFilter {
    /// Accept all events
    All,
    /// Accept only specific event types
    EventTypes(Vec<&'static str>),
    /// Custom filter function
    Custom(fn(&OpsEvent) -> bool),
}

impl EventFilter {
    /// Check if an event passes this filter
    pub fn matches(&self, event: &OpsEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::EventTypes(types) => types.contains(&event.event_type()),
            EventFilter::Custom(filter_fn) => filter_fn(event),
        }
    }
}

/// Event receiver with filtering
pub struct EventReceiver {
    receiver: broadcast::Receiver<OpsEvent>,
    filter: EventFilter,
    name: String,
}

impl EventReceiver {
    /// Create a new event receiver with a filter
    pub fn new(receiver: broadcast::Receiver<OpsEvent>, filter: EventFilter, name: String) -> Self {
        Self {
            receiver,
            filter,
            name,
        }
    }

    /// Receive the next filtered event
    pub async fn recv(&mut self) -> Result<OpsEvent, EventBusError> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if self.filter.matches(&event) {
                        debug!(
                            "Receiver '{}' received event: {}",
                            self.name,
                            event.description()
                        );
                        return Ok(event);
                    }
                    // Keep waiting for the next matching event
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("Receiver '{}' lagged behind by {} events", self.name, n);
                    return Err(EventBusError::Lagged { count: n });
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Event bus closed for receiver '{}'", self.name);
                    return Err(EventBusError::ChannelClosed);
                }
            }
        }
    }

    /// Try to receive an event without blocking
    pub fn try_recv(&mut self) -> Result<Option<OpsEvent>, EventBusError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.filter.matches(&event) {
                        return Ok(Some(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => {
                    return Ok(None);
                }
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    warn!("Receiver '{}' lagged behind by {} events", self.name, n);
                    return Err(EventBusError::Lagged { count: n });
                }
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(EventBusError::ChannelClosed);
                }
            }
        }
    }
}

/// Spawn a task that logs every event as a notification line
///
/// This is the console's notification feed: each event becomes one
/// structured log entry until the bus closes.
pub fn spawn_notification_log(bus: &EventBus) -> tokio::task::JoinHandle<()> {
    let mut receiver = EventReceiver::new(
        bus.subscribe(),
        EventFilter::All,
        "notification-log".to_string(),
    );

    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    info!(kind = event.event_type(), "{}", event.description());
                }
                Err(EventBusError::Lagged { .. }) => continue,
                Err(_) => break,
            }
        }
    })
}
