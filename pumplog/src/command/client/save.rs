use clap::Parser;
use eyre::{eyre, Result};
use pumplog_client::api_client::Client;
use pumplog_client::connectivity::{Connectivity, ConnectivityMonitor};
use pumplog_client::domain::{Entry, StationId};
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use pumplog_client::sync::{SyncEngine, SyncOutcome};
use pumplog_common::domain::Position;
use time::OffsetDateTime;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// Pump the finished measurement is on
    pump: String,
    /// Latitude of the current fix, when one was resolved
    #[clap(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,
    /// Longitude of the current fix, when one was resolved
    #[clap(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let mut registry = store.stations();

        let id: StationId = self.pump.parse().map_err(|e: &str| eyre!(e))?;
        let station = registry
            .get_mut(&id)
            .ok_or_else(|| eyre!("No pump named {id}"))?;

        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Position::new(latitude, longitude)),
            _ => None,
        };

        let Some(entry) = Entry::build(station, location, OffsetDateTime::now_utc()) else {
            println!("Nothing to save: stop the timer and pick the fuel door position first");
            return Ok(());
        };

        store.append(&entry)?;
        station.reset();
        store.save_stations(&registry)?;
        println!(
            "Saved {}s on {id}{}",
            entry.duration,
            if entry.is_match { " (matching)" } else { "" }
        );

        // The entry is already durable locally; a failed sync here only
        // defers to the next trigger.
        let client = Client::new(&settings.server_address)?;
        let online = ConnectivityMonitor::probe(&client).await;
        let engine = SyncEngine::new(store, client, Connectivity::fixed(online));
        match engine.trigger().await {
            Ok(SyncOutcome::Synced(count)) => println!("Synced {count} entries"),
            Ok(outcome) => debug!("post-save sync skipped: {outcome:?}"),
            Err(err) => debug!("post-save sync deferred: {err}"),
        }

        Ok(())
    }
}
