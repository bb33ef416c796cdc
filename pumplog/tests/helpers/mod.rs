use axum::serve;
use eyre::{eyre, Result};
use pumplog_client::domain::{Entry, Station, StationId, Timer};
use pumplog_client::store::LocalStore;
use pumplog_common::domain::Side;
use pumplog_server::database::Database as ServerDatabase;
use pumplog_server::settings::Settings as ServerSettings;
use tempfile::TempDir;
use time::OffsetDateTime;
use tokio::net::TcpListener;

pub struct TestStore {
    pub store: LocalStore,
    // Keeps the directory alive for the duration of the test.
    _temp_dir: TempDir,
}

impl TestStore {
    #[allow(dead_code)]
    pub fn store_dir(&self) -> std::path::PathBuf {
        self._temp_dir.path().join("store")
    }
}

pub fn build_store() -> Result<TestStore> {
    let temp_dir = TempDir::new()?;
    let store = LocalStore::new(temp_dir.path().join("store"))?;
    Ok(TestStore {
        store,
        _temp_dir: temp_dir,
    })
}

/// A station that went through the full start/stop/door flow, ready to be
/// built into an entry.
pub fn build_station(pump_side: Side, door: Side, seconds: u64) -> Station {
    let start = OffsetDateTime::UNIX_EPOCH;
    let mut station = Station::new("pump-1".parse::<StationId>().unwrap(), pump_side);
    station.timer.start(start);
    station
        .timer
        .stop(start + time::Duration::seconds(seconds as i64));
    station.fuel_door_position = Some(door);
    station
}

pub fn build_entry(pump_side: Side, door: Side, seconds: u64) -> Entry {
    let station = build_station(pump_side, door, seconds);
    Entry::build(&station, None, OffsetDateTime::now_utc()).expect("station should be saveable")
}

#[allow(dead_code)]
pub fn stopped_timer(seconds: u64) -> Timer {
    let start = OffsetDateTime::UNIX_EPOCH;
    let mut timer = Timer::Idle;
    timer.start(start);
    timer.stop(start + time::Duration::seconds(seconds as i64));
    timer
}

pub struct TestServer {
    pub settings: ServerSettings,
    pub database: ServerDatabase,
    _temp_dir: TempDir,
}

impl TestServer {
    pub async fn build(host: &str, port: u16) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("server.db");

        let settings: ServerSettings = ServerSettings::builder()?
            .set_default("db_path", db_path.to_str())?
            .set_default("port", port as i64)?
            .set_default("host", host)?
            .build()?
            .try_deserialize()
            .map_err(|e| eyre!("Failed to deserialize {e}"))?;

        let database = ServerDatabase::new(&settings.db_path).await?;

        Ok(TestServer {
            settings,
            database,
            _temp_dir: temp_dir,
        })
    }

    pub fn address(&self) -> String {
        format!("http://{}:{}", self.settings.host, self.settings.port)
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    let host = "127.0.0.1";
    let listener = TcpListener::bind(format!("{}:0", host)).await?;
    let port = listener.local_addr().unwrap().port();

    let server = TestServer::build(host, port).await?;

    let r = pumplog_server::make_router(&server.settings, server.database.clone()).await;
    let _ = tokio::spawn(async move { serve(listener, r.into_make_service()).await.unwrap() });
    Ok(server)
}
