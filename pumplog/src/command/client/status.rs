use eyre::Result;
use pumplog_client::api_client::Client;
use pumplog_client::connectivity::ConnectivityMonitor;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use time::OffsetDateTime;

pub async fn run(settings: &Settings) -> Result<()> {
    let store = LocalStore::new(&settings.store_path)?;
    let client = Client::new(&settings.server_address)?;

    let online = ConnectivityMonitor::probe(&client).await;
    let unsynced = store.unsynced().len();

    println!(
        "{} ({})",
        if online { "online" } else { "offline" },
        settings.server_address
    );
    println!("{unsynced} unsynced entries");

    let registry = store.stations();
    let now = OffsetDateTime::now_utc();
    for station in registry.iter() {
        let state = if station.timer.is_running() {
            format!("recording, {}s", station.timer.elapsed_at(now))
        } else if station.timer.elapsed() > 0 {
            format!("stopped at {}s", station.timer.elapsed())
        } else {
            "ready".to_string()
        };
        let door = match station.fuel_door_position {
            Some(side) => format!(", door {side}"),
            None => String::new(),
        };
        println!("{} ({} side) - {state}{door}", station.id, station.pump_side);
    }

    Ok(())
}
