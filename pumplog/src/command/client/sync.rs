use eyre::Result;
use pumplog_client::api_client::Client;
use pumplog_client::connectivity::{Connectivity, ConnectivityMonitor};
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use pumplog_client::sync::{SyncEngine, SyncOutcome};

pub async fn run(settings: &Settings) -> Result<()> {
    let store = LocalStore::new(&settings.store_path)?;
    let client = Client::new(&settings.server_address)?;

    let online = ConnectivityMonitor::probe(&client).await;
    let engine = SyncEngine::new(store, client, Connectivity::fixed(online));

    match engine.trigger().await? {
        SyncOutcome::Synced(count) => println!("Sync done. {count} uploaded"),
        SyncOutcome::UpToDate => println!("Nothing to sync"),
        SyncOutcome::Offline => {
            println!("Offline. Entries stay queued until the server is reachable")
        }
        SyncOutcome::InFlight => println!("A sync is already running"),
    }

    Ok(())
}
