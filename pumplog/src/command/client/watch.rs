use eyre::Result;
use pumplog_client::api_client::Client;
use pumplog_client::connectivity::ConnectivityMonitor;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use pumplog_client::sync::SyncEngine;
use std::time::Duration;
use tracing::{debug, warn};

pub async fn run(settings: &Settings) -> Result<()> {
    let store = LocalStore::new(&settings.store_path)?;
    let client = Client::new(&settings.server_address)?;

    let interval = Duration::from_secs(settings.probe_interval);
    let (monitor, connectivity) = ConnectivityMonitor::start(client.clone(), interval).await;
    let engine = SyncEngine::new(store, client, connectivity);

    println!(
        "Watching {} every {}s. Ctrl-C to stop.",
        settings.server_address, settings.probe_interval
    );

    // Catch up anything queued from earlier offline sessions before settling
    // into the probe loop.
    if monitor.is_online() {
        match engine.trigger().await {
            Ok(outcome) => debug!("startup sync: {outcome:?}"),
            Err(err) => warn!("startup sync failed: {err}"),
        }
    }

    tokio::select! {
        _ = monitor.run(&engine) => {}
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Shutting down gracefully...");
        }
    }

    Ok(())
}
