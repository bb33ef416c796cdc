use clap::Parser;
use eyre::Result;
use pumplog::command::PumplogCmd;
use pumplog::VERSION;

#[derive(Parser)]
#[command(
    author = "Sam Uherek",
    version = VERSION,
    )]
struct Pumplog {
    #[command(subcommand)]
    pumplog: PumplogCmd,
}

impl Pumplog {
    fn run(self) -> Result<()> {
        self.pumplog.run()
    }
}

fn main() -> Result<()> {
    Pumplog::parse().run()
}
