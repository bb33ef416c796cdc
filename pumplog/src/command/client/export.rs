use clap::Parser;
use eyre::{Context, Result};
use pumplog_client::settings::Settings;
use pumplog_client::store::LocalStore;
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// Target file; defaults to gas-station-data-<date>.json
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl Cmd {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let store = LocalStore::new(&settings.store_path)?;
        let entries = store.entries();

        let path = self.output.unwrap_or_else(|| {
            let date = OffsetDateTime::now_utc().date();
            PathBuf::from(format!("gas-station-data-{date}.json"))
        });

        let raw = serde_json::to_string_pretty(&entries)?;
        fs_err::write(&path, raw).wrap_err("Failed to write export file")?;
        println!("Exported {} entries to {}", entries.len(), path.display());

        Ok(())
    }
}
