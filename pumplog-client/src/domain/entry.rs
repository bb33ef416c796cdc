use crate::domain::station::{Station, StationId};
use pumplog_common::api::RemoteEntry;
use pumplog_common::domain::{Position, Side};
use time::OffsetDateTime;
use uuid::Uuid;

/// A completed measurement. Append-only once created; the `synced` flag is
/// the single exception and flips false -> true exactly once when the remote
/// store confirms the entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub timestamp: OffsetDateTime,
    pub duration: u64,
    pub fuel_door_position: Side,
    pub pump_side: Side,
    pub notes: String,
    pub is_match: bool,
    pub location: Option<Position>,
    pub pump_id: Option<StationId>,
    pub synced: bool,
}

impl Entry {
    /// Builds an entry from a finished station, or `None` when the station
    /// is not in a saveable state (still running, nothing on the clock, or
    /// no door position picked). That is the user-facing validation gate,
    /// not an error path.
    ///
    /// `location` is taken as already resolved; this never queries
    /// geolocation itself. The id is minted here because two entries can
    /// share a creation timestamp.
    pub fn build(station: &Station, location: Option<Position>, now: OffsetDateTime) -> Option<Self> {
        if !station.ready_to_save() {
            return None;
        }
        let fuel_door_position = station.fuel_door_position?;

        Some(Self {
            id: Uuid::now_v7(),
            timestamp: now,
            duration: station.timer.elapsed(),
            fuel_door_position,
            pump_side: station.pump_side,
            notes: station.notes.clone(),
            is_match: fuel_door_position == station.pump_side,
            location,
            pump_id: Some(station.id.clone()),
            synced: false,
        })
    }

    /// Translation into the remote schema's shape.
    pub fn to_remote(&self) -> RemoteEntry {
        RemoteEntry {
            client_id: self.id,
            timestamp: self.timestamp,
            duration: self.duration,
            fuel_door_position: self.fuel_door_position,
            pump_side: self.pump_side,
            notes: self.notes.clone(),
            is_match: self.is_match,
            location: self.location.map(|p| p.to_point()),
            pump_id: self.pump_id.as_ref().map(|id| id.to_string()),
        }
    }
}
