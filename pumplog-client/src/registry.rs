use crate::domain::{Station, StationId};
use pumplog_common::domain::Side;

/// The dynamic set of measurement slots. Keeps creation order for display
/// and allocates fresh ids; removing a slot abandons whatever its timer was
/// doing and never touches already-saved entries.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRegistry {
    next_id: u64,
    stations: Vec<Station>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            stations: Vec::new(),
        }
    }

    /// The classic two-pump setup: one slot per side.
    pub fn with_default_pair() -> Self {
        let mut registry = Self::new();
        registry.add(Side::Driver);
        registry.add(Side::Passenger);
        registry
    }

    pub fn add(&mut self, pump_side: Side) -> StationId {
        let id = StationId::numbered(self.next_id);
        self.next_id += 1;
        self.stations.push(Station::new(id.clone(), pump_side));
        id
    }

    pub fn remove(&mut self, id: &StationId) -> bool {
        let before = self.stations.len();
        self.stations.retain(|s| &s.id != id);
        self.stations.len() != before
    }

    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.stations.iter().find(|s| &s.id == id)
    }

    pub fn get_mut(&mut self, id: &StationId) -> Option<&mut Station> {
        self.stations.iter_mut().find(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
