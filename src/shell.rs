//! Interactive year prompt.
//!
//! Input and output are generic so the loop can be driven from tests with an
//! in-memory reader and writer.

use crate::api::Client;
use crate::models::FIRST_SEASON;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a line typed at the prompt was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearInputError {
    #[error("Please enter a valid number.")]
    NotANumber(String),

    #[error("Year must be between {min} and {max}.")]
    OutOfRange { year: i64, min: i32, max: i32 },
}

/// Validate one line of input against `[1950, max]`.
///
/// Only an empty line (nothing before the line ending) selects `max`; a line of
/// spaces is not a number. Whitespace around digits is ignored.
pub fn parse_year(input: &str, max: i32) -> std::result::Result<i32, YearInputError> {
    let line = input.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(max);
    }
    let s = line.trim();
    let year: i64 = s
        .parse()
        .map_err(|_| YearInputError::NotANumber(s.to_string()))?;
    match i32::try_from(year) {
        Ok(y) if (FIRST_SEASON..=max).contains(&y) => Ok(y),
        _ => Err(YearInputError::OutOfRange {
            year,
            min: FIRST_SEASON,
            max,
        }),
    }
}

/// Text shown before each read.
pub fn prompt_text(max: i32) -> String {
    format!("Enter a year ({}–{}, default {}): ", FIRST_SEASON, max, max)
}

/// Ask until a valid year is entered.
///
/// Rejected input is answered with the matching message and the prompt is shown again.
/// Returns `UnexpectedEof` if input ends before a valid year was read.
pub fn prompt_year<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max: i32,
) -> io::Result<i32> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt_text(max))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a year was entered",
            ));
        }

        match parse_year(&line, max) {
            Ok(year) => return Ok(year),
            Err(e) => {
                log::debug!("rejected year input {:?}: {:?}", line.trim(), e);
                writeln!(output, "{}", e)?;
            }
        }
    }
}

/// Prompt for a season and print its standings table.
///
/// `latest` is the most recent season, discovered once by the caller.
pub fn run<R: BufRead, W: Write>(
    client: &Client,
    latest: i32,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let year = prompt_year(input, output, latest).context("read season year")?;
    let table = client.standings_table(year)?;
    writeln!(output, "{}", table).context("write standings table")?;
    Ok(())
}
