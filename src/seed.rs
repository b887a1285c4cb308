//! Seed data loaded into the stores at session start
//!
//! All values are static literals. Nothing is persisted; a new session
//! starts from exactly this data.

use crate::model::{
    Camera, CameraStatus, Incident, IncidentStatus, Location, LocationStatus, Severity,
};

pub fn cameras() -> Vec<Camera> {
    vec![
        Camera {
            id: "cam-001".to_string(),
            name: "Main Entrance".to_string(),
            location: "Store #12 - Downtown".to_string(),
            status: CameraStatus::Online,
            last_seen: "Live".to_string(),
            resolution: "1080p".to_string(),
            has_audio: true,
            ai_enabled: true,
        },
        Camera {
            id: "cam-002".to_string(),
            name: "Cash Register 1".to_string(),
            location: "Store #12 - Downtown".to_string(),
            status: CameraStatus::Recording,
            last_seen: "Live".to_string(),
            resolution: "4K".to_string(),
            has_audio: false,
            ai_enabled: true,
        },
        Camera {
            id: "cam-003".to_string(),
            name: "Storage Area".to_string(),
            location: "Store #12 - Downtown".to_string(),
            status: CameraStatus::Online,
            last_seen: "Live".to_string(),
            resolution: "1080p".to_string(),
            has_audio: false,
            ai_enabled: false,
        },
        Camera {
            id: "cam-004".to_string(),
            name: "Parking Lot".to_string(),
            location: "Store #12 - Downtown".to_string(),
            status: CameraStatus::Offline,
            last_seen: "2 hours ago".to_string(),
            resolution: "720p".to_string(),
            has_audio: false,
            ai_enabled: true,
        },
        Camera {
            id: "cam-005".to_string(),
            name: "Loading Dock".to_string(),
            location: "Store #8 - Mall".to_string(),
            status: CameraStatus::Online,
            last_seen: "Live".to_string(),
            resolution: "1080p".to_string(),
            has_audio: true,
            ai_enabled: true,
        },
        Camera {
            id: "cam-006".to_string(),
            name: "Customer Service".to_string(),
            location: "Store #8 - Mall".to_string(),
            status: CameraStatus::Recording,
            last_seen: "Live".to_string(),
            resolution: "4K".to_string(),
            has_audio: true,
            ai_enabled: true,
        },
        Camera {
            id: "cam-007".to_string(),
            name: "Emergency Exit".to_string(),
            location: "Store #3 - Airport".to_string(),
            status: CameraStatus::Online,
            last_seen: "Live".to_string(),
            resolution: "1080p".to_string(),
            has_audio: false,
            ai_enabled: true,
        },
        Camera {
            id: "cam-008".to_string(),
            name: "Break Room".to_string(),
            location: "Store #3 - Airport".to_string(),
            status: CameraStatus::Online,
            last_seen: "Live".to_string(),
            resolution: "720p".to_string(),
            has_audio: false,
            ai_enabled: false,
        },
        Camera {
            id: "cam-009".to_string(),
            name: "Inventory Area".to_string(),
            location: "Store #5 - City Center".to_string(),
            status: CameraStatus::Recording,
            last_seen: "Live".to_string(),
            resolution: "4K".to_string(),
            has_audio: false,
            ai_enabled: true,
        },
    ]
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "INC-001".to_string(),
            kind: "Shoplifting".to_string(),
            location: "Store 1 - Electronics".to_string(),
            time: "2024-01-15 14:30".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Investigating,
            description: "Suspicious activity detected near high-value electronics section"
                .to_string(),
            assigned_to: Some("Security Team Alpha".to_string()),
            reporter: "AI Detection System".to_string(),
            camera_id: Some("CAM-001".to_string()),
        },
        Incident {
            id: "INC-002".to_string(),
            kind: "Unauthorized Access".to_string(),
            location: "Store 2 - Staff Area".to_string(),
            time: "2024-01-15 12:15".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Open,
            description: "Person entered restricted staff area without authorization".to_string(),
            assigned_to: None,
            reporter: "Motion Sensor".to_string(),
            camera_id: Some("CAM-015".to_string()),
        },
        Incident {
            id: "INC-003".to_string(),
            kind: "Slip and Fall".to_string(),
            location: "Store 1 - Entrance".to_string(),
            time: "2024-01-15 10:45".to_string(),
            severity: Severity::Low,
            status: IncidentStatus::Resolved,
            description: "Customer slipped near entrance, no injuries reported".to_string(),
            assigned_to: Some("Safety Team".to_string()),
            reporter: "Staff Member".to_string(),
            camera_id: Some("CAM-003".to_string()),
        },
        Incident {
            id: "INC-004".to_string(),
            kind: "Vandalism".to_string(),
            location: "Store 3 - Parking Lot".to_string(),
            time: "2024-01-14 23:20".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Investigating,
            description: "Graffiti detected on exterior wall".to_string(),
            assigned_to: Some("Security Team Beta".to_string()),
            reporter: "Night Security".to_string(),
            camera_id: Some("CAM-022".to_string()),
        },
    ]
}

pub fn locations() -> Vec<Location> {
    vec![
        Location {
            id: "loc-001".to_string(),
            name: "Main Building".to_string(),
            address: "123 Business Plaza, Floor 1".to_string(),
            cameras: 12,
            active_cameras: 12,
            status: LocationStatus::Online,
            last_updated: "2 min ago".to_string(),
        },
        Location {
            id: "loc-002".to_string(),
            name: "Parking Area A".to_string(),
            address: "North Parking Structure".to_string(),
            cameras: 8,
            active_cameras: 8,
            status: LocationStatus::Online,
            last_updated: "5 min ago".to_string(),
        },
        Location {
            id: "loc-003".to_string(),
            name: "Warehouse Zone".to_string(),
            address: "Industrial District, Building C".to_string(),
            cameras: 16,
            active_cameras: 15,
            status: LocationStatus::Partial,
            last_updated: "1 hour ago".to_string(),
        },
        Location {
            id: "loc-004".to_string(),
            name: "Perimeter Security".to_string(),
            address: "Facility Boundary".to_string(),
            cameras: 20,
            active_cameras: 20,
            status: LocationStatus::Online,
            last_updated: "30 sec ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_identifiers_unique() {
        let cameras = cameras();
        let ids: HashSet<_> = cameras.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cameras.len());

        let incidents = incidents();
        let ids: HashSet<_> = incidents.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), incidents.len());

        let locations = locations();
        let ids: HashSet<_> = locations.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), locations.len());
    }

    #[test]
    fn test_location_active_counts_within_totals() {
        for location in locations() {
            assert!(location.active_cameras <= location.cameras, "{}", location.name);
        }
    }
}
