mod helpers;

use helpers::{build_entry, build_station, build_store, spawn_server};
use pumplog_client::api_client::Client;
use pumplog_client::connectivity::{Connectivity, ConnectivityMonitor};
use pumplog_client::domain::Entry;
use pumplog_client::sync::{SyncEngine, SyncOutcome};
use pumplog_common::domain::Side;
use std::time::Duration;
use time::OffsetDateTime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn health_body() -> serde_json::Value {
    serde_json::json!({ "status": "Ok", "version": "0.1.0" })
}

#[tokio::test]
async fn pending_batch_syncs_to_the_server() {
    let server = spawn_server().await.unwrap();
    let test = build_store().unwrap();

    for i in 1..=3 {
        let entry = build_entry(Side::Driver, Side::Passenger, i * 10);
        test.store.append(&entry).unwrap();
    }
    assert_eq!(test.store.unsynced().len(), 3);

    let client = Client::new(&server.address()).unwrap();
    let online = ConnectivityMonitor::probe(&client).await;
    assert!(online);

    let engine = SyncEngine::new(test.store.clone(), client.clone(), Connectivity::fixed(online));
    let outcome = engine.trigger().await.unwrap();

    assert_eq!(outcome, SyncOutcome::Synced(3));
    assert!(test.store.entries().iter().all(|e| e.synced));
    assert!(test.store.unsynced().is_empty());
    assert!(test.store.unsynced_cache().is_empty());

    // The read path sees everything, newest first.
    let remote = client.fetch_all().await.unwrap();
    assert_eq!(remote.len(), 3);
    assert!(remote.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[tokio::test]
async fn nothing_pending_is_a_no_op() {
    let server = spawn_server().await.unwrap();
    let test = build_store().unwrap();

    let client = Client::new(&server.address()).unwrap();
    let engine = SyncEngine::new(test.store.clone(), client, Connectivity::fixed(true));

    assert_eq!(engine.trigger().await.unwrap(), SyncOutcome::UpToDate);
}

#[tokio::test]
async fn failed_transmission_leaves_the_batch_eligible() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_body()))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/entries"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let test = build_store().unwrap();
    test.store
        .append(&build_entry(Side::Driver, Side::Driver, 11))
        .unwrap();
    test.store
        .append(&build_entry(Side::Passenger, Side::Driver, 22))
        .unwrap();

    let client = Client::new(&mock_server.uri()).unwrap();
    let engine = SyncEngine::new(test.store.clone(), client, Connectivity::fixed(true));

    assert!(engine.trigger().await.is_err());
    assert_eq!(test.store.unsynced().len(), 2);

    // The next trigger re-attempts with the very same batch.
    assert!(engine.trigger().await.is_err());
    assert_eq!(test.store.unsynced().len(), 2);
}

#[tokio::test]
async fn offline_trigger_transmits_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entries"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let test = build_store().unwrap();
    test.store
        .append(&build_entry(Side::Driver, Side::Driver, 5))
        .unwrap();

    let client = Client::new(&mock_server.uri()).unwrap();
    let engine = SyncEngine::new(test.store.clone(), client, Connectivity::fixed(false));

    assert_eq!(engine.trigger().await.unwrap(), SyncOutcome::Offline);
    assert_eq!(test.store.unsynced().len(), 1);
}

#[tokio::test]
async fn overlapping_triggers_send_a_single_batch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entries"))
        .respond_with(
            ResponseTemplate::new(200).set_delay(Duration::from_millis(250)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let test = build_store().unwrap();
    test.store
        .append(&build_entry(Side::Driver, Side::Passenger, 90))
        .unwrap();

    let client = Client::new(&mock_server.uri()).unwrap();
    let engine = SyncEngine::new(test.store.clone(), client, Connectivity::fixed(true));

    let (first, second) = tokio::join!(engine.trigger(), engine.trigger());

    assert_eq!(first.unwrap(), SyncOutcome::Synced(1));
    assert_eq!(second.unwrap(), SyncOutcome::InFlight);
    assert!(test.store.unsynced().is_empty());
}

#[tokio::test]
async fn duplicate_submission_is_dropped_by_the_remote() {
    let server = spawn_server().await.unwrap();
    let client = Client::new(&server.address()).unwrap();

    let entry = build_entry(Side::Passenger, Side::Passenger, 45);
    let records = vec![entry.to_remote()];

    // A crash between transmit-success and the local confirm replays the
    // batch on the next trigger; the natural key keeps it single.
    client.post_entries(&records).await.unwrap();
    client.post_entries(&records).await.unwrap();

    let remote = client.fetch_all().await.unwrap();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].client_id, entry.id);
}

#[tokio::test]
async fn location_reaches_the_remote_as_a_point_literal() {
    let server = spawn_server().await.unwrap();
    let client = Client::new(&server.address()).unwrap();

    let station = build_station(Side::Driver, Side::Driver, 12);
    let position = pumplog_common::domain::Position::new(48.2082, 16.3738);
    let entry = Entry::build(&station, Some(position), OffsetDateTime::now_utc()).unwrap();

    client.post_entries(&[entry.to_remote()]).await.unwrap();

    let remote = client.fetch_all().await.unwrap();
    assert_eq!(remote[0].location.as_deref(), Some("POINT(16.3738 48.2082)"));
    assert_eq!(remote[0].pump_id.as_deref(), Some("pump-1"));
}

/// Full walk-through: time 12 seconds on a driver-side pump, tag a
/// driver-side fuel door, save offline, then come online.
#[tokio::test]
async fn saved_entry_syncs_once_online() {
    let test = build_store().unwrap();

    let start = OffsetDateTime::UNIX_EPOCH;
    let mut registry = test.store.stations();
    let id = registry.add(Side::Driver);
    let station = registry.get_mut(&id).unwrap();
    station.timer.start(start);
    station.timer.stop(start + time::Duration::seconds(12));
    station.fuel_door_position = Some(Side::Driver);

    let entry = Entry::build(station, None, OffsetDateTime::now_utc()).unwrap();
    assert_eq!(entry.duration, 12);
    assert!(entry.is_match);
    assert!(!entry.synced);

    test.store.append(&entry).unwrap();
    station.reset();
    test.store.save_stations(&registry).unwrap();

    // Offline: the save is durable, the sync is deferred.
    let offline_engine = SyncEngine::new(
        test.store.clone(),
        Client::new("http://127.0.0.1:9").unwrap(),
        Connectivity::fixed(false),
    );
    assert_eq!(
        offline_engine.trigger().await.unwrap(),
        SyncOutcome::Offline
    );
    assert_eq!(test.store.unsynced().len(), 1);

    // Back online: the queued entry goes out and gets confirmed.
    let server = spawn_server().await.unwrap();
    let client = Client::new(&server.address()).unwrap();
    let engine = SyncEngine::new(test.store.clone(), client, Connectivity::fixed(true));

    assert_eq!(engine.trigger().await.unwrap(), SyncOutcome::Synced(1));
    let stored = test.store.entries();
    assert!(stored[0].synced);
    assert!(test.store.unsynced_cache().is_empty());
}
