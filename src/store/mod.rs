mod filter;

pub use filter::{filter, Faceted, FilterQuery, Searchable};

use crate::model::{Camera, Incident, IncidentStatus, Location, Severity};
use tracing::debug;

/// Facet category names shared by the stores and the API layer
pub mod facets {
    pub const STATUS: &str = "status";
    pub const SEVERITY: &str = "severity";
    pub const LOCATION: &str = "location";
    pub const RESOLUTION: &str = "resolution";
}

/// A record held in an entity store, addressed by its identifier
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Camera {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Incident {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Camera {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location]
    }
}

impl Faceted for Camera {
    fn facet_value(&self, category: &str) -> Option<&str> {
        match category {
            facets::STATUS => Some(self.status.as_str()),
            facets::LOCATION => Some(&self.location),
            facets::RESOLUTION => Some(&self.resolution),
            _ => None,
        }
    }
}

impl Searchable for Incident {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.kind, &self.location]
    }
}

impl Faceted for Incident {
    fn facet_value(&self, category: &str) -> Option<&str> {
        match category {
            facets::SEVERITY => Some(self.severity.as_str()),
            facets::STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Location {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.address]
    }
}

impl Faceted for Location {
    fn facet_value(&self, category: &str) -> Option<&str> {
        match category {
            facets::STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

/// Ordered in-memory collection of records for one entity kind
///
/// Records keep their insertion order; filtering and mutation never
/// reorder the sequence.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Look up a record by identifier
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Insert a record at the front of the sequence
    pub fn prepend(&mut self, record: T) {
        self.records.insert(0, record);
    }

    /// Apply a mutation to the record matching `id`
    ///
    /// Returns false and leaves the store untouched when no record
    /// matches. Callers never see an error for a missing identifier.
    pub fn update<F>(&mut self, id: &str, mutate: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                mutate(record);
                true
            }
            None => false,
        }
    }

    /// Stable filter preserving store order
    pub fn filter(&self, query: &FilterQuery) -> Vec<&T>
    where
        T: Searchable + Faceted,
    {
        filter(&self.records, query)
    }
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

const INCIDENT_ID_PREFIX: &str = "INC-";

impl EntityStore<Incident> {
    /// Replace the status of the matching incident, leaving every other
    /// field and the sequence order unchanged
    ///
    /// A missing identifier is a silent no-op.
    pub fn update_status(&mut self, id: &str, status: IncidentStatus) -> bool {
        let updated = self.update(id, |incident| incident.status = status);
        if updated {
            debug!(incident = id, status = %status, "incident status updated");
        } else {
            debug!(incident = id, "status update for unknown incident ignored");
        }
        updated
    }

    /// Synthesize a manually reported incident and prepend it
    ///
    /// The identifier is the fixed prefix plus a zero-padded sequence
    /// number derived from the current store length. The store has no
    /// delete operation, so identifiers are never reused within a session.
    pub fn open_manual_incident<S: Into<String>>(&mut self, time: S) -> Incident {
        let incident = Incident {
            id: format!("{}{:03}", INCIDENT_ID_PREFIX, self.len() + 1),
            kind: "Manual Report".to_string(),
            location: "Select Location".to_string(),
            time: time.into(),
            severity: Severity::Medium,
            status: IncidentStatus::Open,
            description: "New incident reported manually".to_string(),
            assigned_to: None,
            reporter: "Security Officer".to_string(),
            camera_id: None,
        };
        debug!(incident = %incident.id, "manual incident opened");
        self.prepend(incident.clone());
        incident
    }
}

/// Identifier of the record currently highlighted for detail display
///
/// Selecting an identifier that is not in the store is permitted; it
/// simply resolves to no record.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn select<S: Into<String>>(&mut self, id: S) {
        self.current = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// The selected record, if the identifier resolves in the store
    pub fn resolve<'a, T: Record>(&self, store: &'a EntityStore<T>) -> Option<&'a T> {
        self.current.as_deref().and_then(|id| store.get(id))
    }
}
