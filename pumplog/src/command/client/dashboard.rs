use eyre::Result;
use pumplog_client::api_client::Client;
use pumplog_client::dashboard::DashboardStats;
use pumplog_client::settings::Settings;
use time::format_description::well_known::Rfc3339;

pub async fn run(settings: &Settings) -> Result<()> {
    let client = Client::new(&settings.server_address)?;
    let entries = client.fetch_all().await?;
    let stats = DashboardStats::from_entries(&entries);

    if stats.total_entries == 0 {
        println!("No entries in the remote store yet");
        return Ok(());
    }

    println!("Total entries     {}", stats.total_entries);
    println!("Average duration  {:.1}s", stats.average_duration);
    println!("Match rate        {:.1}%", stats.match_percentage);
    println!(
        "Matched           {} / {}",
        stats.matched_count, stats.unmatched_count
    );

    println!();
    println!("Service time distribution");
    for bucket in &stats.time_distribution {
        println!("  {:>9}  {}", bucket.label(), "#".repeat(bucket.count));
    }

    println!();
    println!("Case analysis");
    for case in &stats.cases {
        println!(
            "  {} door - {} pump: {} at {:.1}s avg{}",
            case.fuel_door_position,
            case.pump_side,
            case.count,
            case.average_duration,
            if case.is_match { " (matching)" } else { "" }
        );
    }

    println!();
    println!("Recent entries");
    for entry in entries.iter().take(10) {
        let timestamp = entry.timestamp.format(&Rfc3339)?;
        println!(
            "  {timestamp}  {:>4}s  {} - {}{}",
            entry.duration,
            entry.fuel_door_position,
            entry.pump_side,
            if entry.is_match { " (matching)" } else { "" }
        );
    }

    Ok(())
}
