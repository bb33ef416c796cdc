use clap::Subcommand;
use eyre::{eyre, Result};
use pumplog_client::domain::StationId;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use pumplog_common::domain::Side;
use time::OffsetDateTime;

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Add a pump configured for the given side
    Add {
        /// "driver" or "passenger"
        side: String,
    },
    /// Remove a pump. Entries it produced stay untouched.
    Remove { id: String },
    /// List the pumps and their timers
    List,
}

impl Cmd {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let mut registry = store.stations();

        match self {
            Self::Add { side } => {
                let side: Side = side.parse().map_err(|e: &str| eyre!(e))?;
                let id = registry.add(side);
                store.save_stations(&registry)?;
                println!("Added {id} ({side} side pump)");
            }
            Self::Remove { id } => {
                let id: StationId = id.parse().map_err(|e: &str| eyre!(e))?;
                if registry.remove(&id) {
                    store.save_stations(&registry)?;
                    println!("Removed {id}");
                } else {
                    println!("No pump named {id}");
                }
            }
            Self::List => {
                let now = OffsetDateTime::now_utc();
                for station in registry.iter() {
                    let state = if station.timer.is_running() {
                        format!("recording, {}s", station.timer.elapsed_at(now))
                    } else if station.timer.elapsed() > 0 {
                        format!("stopped at {}s", station.timer.elapsed())
                    } else {
                        "ready".to_string()
                    };
                    println!("{} ({} side) - {}", station.id, station.pump_side, state);
                }
            }
        }

        Ok(())
    }
}
