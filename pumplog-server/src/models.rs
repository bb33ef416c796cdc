use pumplog_common::api::RemoteEntry;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug)]
pub struct NewEntry {
    pub client_id: String,
    pub timestamp: OffsetDateTime,
    pub duration: i64,
    pub fuel_door_position: String,
    pub pump_side: String,
    pub notes: String,
    pub is_match: bool,
    pub location: Option<String>,
    pub pump_id: Option<String>,
}

impl From<RemoteEntry> for NewEntry {
    fn from(value: RemoteEntry) -> Self {
        Self {
            client_id: value.client_id.to_string(),
            timestamp: value.timestamp,
            duration: value.duration as i64,
            fuel_door_position: value.fuel_door_position.as_str().to_string(),
            pump_side: value.pump_side.as_str().to_string(),
            notes: value.notes,
            is_match: value.is_match,
            location: value.location,
            pump_id: value.pump_id,
        }
    }
}

#[derive(Debug)]
pub struct DbEntry {
    pub id: i64,
    pub client_id: String,
    pub timestamp: OffsetDateTime,
    pub duration: i64,
    pub fuel_door_position: String,
    pub pump_side: String,
    pub notes: String,
    pub is_match: bool,
    pub location: Option<String>,
    pub pump_id: Option<String>,
}

impl DbEntry {
    /// Rows are only ever written from typed values, so the parses here do
    /// not fail on data this server produced.
    pub fn into_remote(self) -> RemoteEntry {
        RemoteEntry {
            client_id: Uuid::parse_str(&self.client_id).unwrap(),
            timestamp: self.timestamp,
            duration: self.duration as u64,
            fuel_door_position: FromStr::from_str(&self.fuel_door_position).unwrap(),
            pump_side: FromStr::from_str(&self.pump_side).unwrap(),
            notes: self.notes,
            is_match: self.is_match,
            location: self.location,
            pump_id: self.pump_id,
        }
    }
}
