use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection status of a camera feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    /// Camera is online and streaming
    Online,
    /// Camera is unreachable
    Offline,
    /// Camera is online and actively recording
    Recording,
}

impl CameraStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Online => "online",
            CameraStatus::Offline => "offline",
            CameraStatus::Recording => "recording",
        }
    }

    /// Whether the feed is delivering frames (online or recording)
    pub fn is_live(&self) -> bool {
        matches!(self, CameraStatus::Online | CameraStatus::Recording)
    }
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a security incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a security incident
///
/// Transitions are unconstrained: any status is reachable from any other
/// via explicit operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate status of a monitored location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    /// All cameras reporting
    Online,
    /// Some cameras down
    Partial,
    /// Location unreachable
    Offline,
}

impl LocationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationStatus::Online => "online",
            LocationStatus::Partial => "partial",
            LocationStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation category behind badge and indicator styling
///
/// Every status and severity value maps to exactly one tone; free-form
/// labels fall back to `Neutral` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Positive,
    Warning,
    Critical,
    Neutral,
}

impl StatusTone {
    /// Classify a free-form status or severity label
    ///
    /// Activity feed entries carry labels outside the closed enums
    /// ("monitoring" among them), so unrecognized input maps to `Neutral`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "online" | "resolved" | "low" => StatusTone::Positive,
            "recording" | "investigating" | "medium" | "partial" => StatusTone::Warning,
            "offline" | "open" | "high" => StatusTone::Critical,
            _ => StatusTone::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Positive => "positive",
            StatusTone::Warning => "warning",
            StatusTone::Critical => "critical",
            StatusTone::Neutral => "neutral",
        }
    }
}

impl fmt::Display for StatusTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CameraStatus {
    pub fn tone(&self) -> StatusTone {
        match self {
            CameraStatus::Online => StatusTone::Positive,
            CameraStatus::Recording => StatusTone::Warning,
            CameraStatus::Offline => StatusTone::Critical,
        }
    }
}

impl Severity {
    pub fn tone(&self) -> StatusTone {
        match self {
            Severity::High => StatusTone::Critical,
            Severity::Medium => StatusTone::Warning,
            Severity::Low => StatusTone::Positive,
        }
    }
}

impl IncidentStatus {
    pub fn tone(&self) -> StatusTone {
        match self {
            IncidentStatus::Open => StatusTone::Critical,
            IncidentStatus::Investigating => StatusTone::Warning,
            IncidentStatus::Resolved => StatusTone::Positive,
        }
    }
}

impl LocationStatus {
    pub fn tone(&self) -> StatusTone {
        match self {
            LocationStatus::Online => StatusTone::Positive,
            LocationStatus::Partial => StatusTone::Warning,
            LocationStatus::Offline => StatusTone::Critical,
        }
    }
}

/// A camera feed registered with the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    /// Site label, not a foreign key into the location store
    pub location: String,
    pub status: CameraStatus,
    pub last_seen: String,
    pub resolution: String,
    pub has_audio: bool,
    pub ai_enabled: bool,
}

impl Camera {
    /// Playback controls are never offered for an offline camera
    pub fn playback_available(&self) -> bool {
        self.status != CameraStatus::Offline
    }
}

/// A tracked security incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub time: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub reporter: String,
    /// Soft reference to a camera, no integrity enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<String>,
}

/// A monitored site with its camera inventory counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub cameras: u32,
    pub active_cameras: u32,
    pub status: LocationStatus,
    pub last_updated: String,
}

impl Location {
    /// True when the reported status claims more than the counts support
    ///
    /// Status is informational and never derived from the counts, so a
    /// location can report `online` while cameras are down. Callers that
    /// care can surface the discrepancy with this check.
    pub fn is_under_provisioned(&self) -> bool {
        self.status == LocationStatus::Online && self.active_cameras < self.cameras
    }
}
