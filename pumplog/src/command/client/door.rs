use clap::Parser;
use eyre::{eyre, Result};
use pumplog_client::domain::StationId;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use pumplog_common::domain::Side;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// Pump the measurement is on
    pump: String,
    /// Side the fuel door was on: "driver" or "passenger"
    side: String,
}

impl Cmd {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let mut registry = store.stations();

        let id: StationId = self.pump.parse().map_err(|e: &str| eyre!(e))?;
        let side: Side = self.side.parse().map_err(|e: &str| eyre!(e))?;
        let station = registry
            .get_mut(&id)
            .ok_or_else(|| eyre!("No pump named {id}"))?;

        station.fuel_door_position = Some(side);
        let matching = side == station.pump_side;
        store.save_stations(&registry)?;

        println!(
            "Fuel door on the {side} side{}",
            if matching { " (matching)" } else { "" }
        );

        Ok(())
    }
}
