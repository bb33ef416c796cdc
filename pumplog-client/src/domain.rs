pub mod entry;
pub mod station;

pub use entry::Entry;
pub use station::{Station, StationId, Timer};
