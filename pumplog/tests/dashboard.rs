use pumplog_client::dashboard::DashboardStats;
use pumplog_common::api::RemoteEntry;
use pumplog_common::domain::Side;
use time::OffsetDateTime;
use uuid::Uuid;

fn remote(duration: u64, door: Side, pump: Side) -> RemoteEntry {
    RemoteEntry {
        client_id: Uuid::now_v7(),
        timestamp: OffsetDateTime::now_utc(),
        duration,
        fuel_door_position: door,
        pump_side: pump,
        notes: String::new(),
        is_match: door == pump,
        location: None,
        pump_id: None,
    }
}

#[test]
fn empty_remote_store_yields_zeroed_stats() {
    let stats = DashboardStats::from_entries(&[]);

    assert_eq!(stats.total_entries, 0);
    assert_eq!(stats.average_duration, 0.0);
    assert_eq!(stats.match_percentage, 0.0);
    assert!(stats.time_distribution.is_empty());
    assert!(stats.cases.is_empty());
}

#[test]
fn key_stats_follow_the_entry_set() {
    let entries = vec![
        remote(10, Side::Driver, Side::Driver),
        remote(20, Side::Driver, Side::Driver),
        remote(40, Side::Passenger, Side::Driver),
        remote(65, Side::Driver, Side::Passenger),
    ];

    let stats = DashboardStats::from_entries(&entries);

    assert_eq!(stats.total_entries, 4);
    assert_eq!(stats.average_duration, 33.75);
    assert_eq!(stats.match_percentage, 50.0);
    assert_eq!(stats.matched_count, 2);
    assert_eq!(stats.unmatched_count, 2);
}

#[test]
fn service_times_land_in_thirty_second_buckets() {
    let entries = vec![
        remote(0, Side::Driver, Side::Driver),
        remote(29, Side::Driver, Side::Driver),
        remote(30, Side::Driver, Side::Driver),
        remote(65, Side::Driver, Side::Driver),
    ];

    let stats = DashboardStats::from_entries(&entries);

    let buckets: Vec<(u64, usize)> = stats
        .time_distribution
        .iter()
        .map(|b| (b.start, b.count))
        .collect();
    assert_eq!(buckets, vec![(0, 2), (30, 1), (60, 1)]);
    assert_eq!(stats.time_distribution[0].label(), "0-30s");
}

#[test]
fn cases_aggregate_per_door_pump_combination() {
    let entries = vec![
        remote(10, Side::Driver, Side::Driver),
        remote(21, Side::Driver, Side::Driver),
        remote(40, Side::Passenger, Side::Driver),
    ];

    let stats = DashboardStats::from_entries(&entries);

    assert_eq!(stats.cases.len(), 2);

    let matching = &stats.cases[0];
    assert_eq!(matching.fuel_door_position, Side::Driver);
    assert_eq!(matching.pump_side, Side::Driver);
    assert_eq!(matching.count, 2);
    assert_eq!(matching.average_duration, 15.5);
    assert!(matching.is_match);

    let crossed = &stats.cases[1];
    assert_eq!(crossed.fuel_door_position, Side::Passenger);
    assert_eq!(crossed.count, 1);
    assert_eq!(crossed.average_duration, 40.0);
    assert!(!crossed.is_match);
}

#[test]
fn case_averages_round_to_one_decimal() {
    let entries = vec![
        remote(10, Side::Driver, Side::Driver),
        remote(10, Side::Driver, Side::Driver),
        remote(11, Side::Driver, Side::Driver),
    ];

    let stats = DashboardStats::from_entries(&entries);
    assert_eq!(stats.cases[0].average_duration, 10.3);
}
