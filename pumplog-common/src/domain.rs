use std::str::FromStr;

/// Which side of the car something sits on. Used both for the fuel door
/// (reported by the user) and for the pump configuration (fixed per slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Driver,
    Passenger,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Driver => "driver",
            Side::Passenger => "passenger",
        }
    }
}

impl FromStr for Side {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(Self::Driver),
            "passenger" => Ok(Self::Passenger),
            _ => Err("expected 'driver' or 'passenger'"),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved geolocation fix. The client only ever consumes an already
/// resolved pair; acquisition is somebody else's problem.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Geometric point literal for the remote schema. Longitude first.
    pub fn to_point(&self) -> String {
        format!("POINT({} {})", self.longitude, self.latitude)
    }
}
