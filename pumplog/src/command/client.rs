use clap::Parser;
use eyre::Result;
use tracing_subscriber::{self, fmt, prelude::*, EnvFilter};

mod dashboard;
mod door;
mod entries;
mod export;
mod note;
mod pump;
mod save;
mod start;
mod status;
mod stop;
mod sync;
mod watch;

#[derive(Parser, Debug)]
#[clap(infer_subcommands = true)]
pub enum Cmd {
    /// Manage the set of pumps
    #[command(subcommand)]
    Pump(pump::Cmd),
    /// Start timing on a pump
    Start(start::Cmd),
    /// Stop timing on a pump
    Stop(stop::Cmd),
    /// Record which side the fuel door was on
    Door(door::Cmd),
    /// Attach a note to the current measurement
    Note(note::Cmd),
    /// Save the finished measurement as an entry
    Save(save::Cmd),
    /// Show the most recent local entries
    Entries(entries::Cmd),
    /// Show connectivity, pending count and timers
    Status,
    /// Push unsynced entries to the remote store
    Sync,
    /// Keep watching connectivity and sync on reconnect
    Watch,
    /// Write the full local entry list to a JSON file
    Export(export::Cmd),
    /// Remote analytics over all collected entries
    Dashboard,
}

impl Cmd {
    #[tokio::main]
    pub async fn run(self) -> Result<()> {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env())
            .init();

        let settings = pumplog_client::settings::Settings::new()?;

        match self {
            Self::Pump(cmd) => cmd.run(&settings),
            Self::Start(cmd) => cmd.run(&settings),
            Self::Stop(cmd) => cmd.run(&settings),
            Self::Door(cmd) => cmd.run(&settings),
            Self::Note(cmd) => cmd.run(&settings),
            Self::Save(cmd) => cmd.run(&settings).await,
            Self::Entries(cmd) => cmd.run(&settings),
            Self::Status => status::run(&settings).await,
            Self::Sync => sync::run(&settings).await,
            Self::Watch => watch::run(&settings).await,
            Self::Export(cmd) => cmd.run(&settings),
            Self::Dashboard => dashboard::run(&settings).await,
        }
    }
}
