use clap::Parser;
use eyre::{eyre, Result};
use pumplog_client::domain::StationId;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use time::OffsetDateTime;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// Pump to start timing on
    pump: String,
}

impl Cmd {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let mut registry = store.stations();

        let id: StationId = self.pump.parse().map_err(|e: &str| eyre!(e))?;
        let station = registry
            .get_mut(&id)
            .ok_or_else(|| eyre!("No pump named {id}"))?;

        if station.timer.start(OffsetDateTime::now_utc()) {
            store.save_stations(&registry)?;
            println!("Recording time on {id}");
        } else {
            println!("{id} is already recording");
        }

        Ok(())
    }
}
