use anyhow::{Context, Result};
use clap::Parser;
use f1_standings::{Client, shell};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "f1-standings",
    version,
    about = "Print Formula 1 driver standings for a season",
    long_about = "Print Formula 1 driver standings for a season.\n\n\
        Asks for a year between 1950 and the latest season (press Enter for the latest) \
        and prints the standings table. Set F1_STANDINGS_API_URL to use another API host, \
        and RUST_LOG to control log output on stderr."
)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _cli = Cli::parse();

    let client = Client::from_env();
    let latest = client
        .latest_season()
        .context("could not determine the latest season")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&client, latest, &mut stdin.lock(), &mut stdout.lock())
}
