use pumplog_common::domain::Side;
use std::str::FromStr;
use time::OffsetDateTime;

/// Identifier of one measurement slot. Allocated by the registry as
/// "pump-{n}"; saved entries keep a copy of it, so removing a slot never
/// touches history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StationId(String);

impl StationId {
    pub(crate) fn numbered(n: u64) -> Self {
        Self(format!("pump-{n}"))
    }
}

impl FromStr for StationId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("station id must not be empty");
        }
        if s.chars().any(char::is_whitespace) {
            return Err("station id must not contain whitespace");
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for StationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stopwatch for one slot. Stopping is the only transition that commits an
/// elapsed value; the display tick merely derives one from the clock while
/// running. Every transition takes `now` as a parameter so nothing in here
/// reads the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Timer {
    Idle,
    Running { started_at: OffsetDateTime },
    Stopped { elapsed: u64 },
}

impl Timer {
    pub fn is_running(&self) -> bool {
        matches!(self, Timer::Running { .. })
    }

    /// The committed duration in whole seconds. Zero unless stopped.
    pub fn elapsed(&self) -> u64 {
        match self {
            Timer::Stopped { elapsed } => *elapsed,
            _ => 0,
        }
    }

    /// Advisory display value. Follows the clock while running and is never
    /// the value that gets persisted.
    pub fn elapsed_at(&self, now: OffsetDateTime) -> u64 {
        match self {
            Timer::Idle => 0,
            Timer::Running { started_at } => whole_seconds(now - *started_at),
            Timer::Stopped { elapsed } => *elapsed,
        }
    }

    /// Returns false when already running.
    pub fn start(&mut self, now: OffsetDateTime) -> bool {
        if self.is_running() {
            return false;
        }
        *self = Timer::Running { started_at: now };
        true
    }

    /// Freezes the elapsed value. Returns false when not running, so a
    /// repeated stop has no further effect.
    pub fn stop(&mut self, now: OffsetDateTime) -> bool {
        match self {
            Timer::Running { started_at } => {
                *self = Timer::Stopped {
                    elapsed: whole_seconds(now - *started_at),
                };
                true
            }
            _ => false,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::Idle
    }
}

fn whole_seconds(duration: time::Duration) -> u64 {
    duration.whole_seconds().max(0) as u64
}

/// One configurable measurement point: a pump with its own timer and
/// classification fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub pump_side: Side,
    pub timer: Timer,
    pub fuel_door_position: Option<Side>,
    pub notes: String,
}

impl Station {
    pub fn new(id: StationId, pump_side: Side) -> Self {
        Self {
            id,
            pump_side,
            timer: Timer::Idle,
            fuel_door_position: None,
            notes: String::new(),
        }
    }

    /// Save gate: stopped, time on the clock, door position picked.
    pub fn ready_to_save(&self) -> bool {
        !self.timer.is_running() && self.timer.elapsed() > 0 && self.fuel_door_position.is_some()
    }

    /// Clears the measurement fields after a save. Pump side and identity
    /// survive.
    pub fn reset(&mut self) {
        self.timer = Timer::Idle;
        self.fuel_door_position = None;
        self.notes.clear();
    }
}
