use crate::domain::Side;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub value: String,
}

/// One entry in the shape the remote store expects. Field names follow the
/// remote schema convention, and `location` is a `POINT(<lon> <lat>)`
/// literal when present.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RemoteEntry {
    pub client_id: Uuid,
    pub timestamp: OffsetDateTime,
    pub duration: u64,
    pub fuel_door_position: Side,
    pub pump_side: Side,
    pub notes: String,
    pub is_match: bool,
    pub location: Option<String>,
    pub pump_id: Option<String>,
}
