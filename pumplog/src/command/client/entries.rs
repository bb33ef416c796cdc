use clap::Parser;
use eyre::Result;
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use time::format_description::well_known::Rfc3339;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// How many of the most recent entries to show
    #[clap(long, short, default_value_t = 10)]
    count: usize,
}

impl Cmd {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let entries = store.entries();

        if entries.is_empty() {
            println!("No entries yet");
            return Ok(());
        }

        for entry in entries.iter().take(self.count) {
            let timestamp = entry.timestamp.format(&Rfc3339)?;
            println!(
                "{timestamp}  {:>4}s  {} door - {} pump{}{}",
                entry.duration,
                entry.fuel_door_position,
                entry.pump_side,
                if entry.is_match { " (matching)" } else { "" },
                if entry.synced { "" } else { "  [unsynced]" },
            );
            if !entry.notes.is_empty() {
                println!("    {}", entry.notes);
            }
        }

        Ok(())
    }
}
