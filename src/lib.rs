//! f1_standings
//!
//! A small Rust library for fetching Formula 1 driver standings from the
//! Jolpica/Ergast API and rendering them as a text table. Pairs with the
//! `f1-standings` CLI.
//!
//! ### Features
//! - Discover the most recent season known to the API
//! - Fetch one season's driver standings, with a bounded retry on transport failures
//! - Project each record into POS, Driver, Nationality, Constructor, Points and Wins
//! - Render a left-aligned table, or drive the interactive year prompt
//!
//! ### Example
//! ```no_run
//! use f1_standings::Client;
//!
//! let client = Client::default();
//! let latest = client.latest_season()?;
//! let table = client.standings_table(latest)?;
//! println!("{}", table);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod report;
pub mod shell;
pub mod standings;

pub use api::{Client, fetch_json};
pub use error::{Error, Result};
pub use models::{DriverStanding, FIRST_SEASON};
pub use report::{HEADERS, StandingsRow, StandingsTable, assemble};
