use clap::Parser;
use eyre::{eyre, Result};
use pumplog_client::domain::StationId;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// Pump the measurement is on
    pump: String,
    /// Any unusual circumstances
    text: String,
}

impl Cmd {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let mut registry = store.stations();

        let id: StationId = self.pump.parse().map_err(|e: &str| eyre!(e))?;
        let station = registry
            .get_mut(&id)
            .ok_or_else(|| eyre!("No pump named {id}"))?;

        station.notes = self.text;
        store.save_stations(&registry)?;
        println!("Noted");

        Ok(())
    }
}
