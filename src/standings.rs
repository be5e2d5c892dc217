//! Locate the driver standings list in a season response and project it into columns.
//!
//! Each projection walks the records in API order and fails on the first record
//! that lacks a required field; nothing is defaulted.

use crate::error::{Error, Result};
use crate::models::{Driver, DriverStanding};
use serde_json::Value;

/// Pull the per-driver records for `year` out of a `driverStandings.json` document.
///
/// ### Errors
/// - `Error::NotFound` when the season has no published standings
/// - `Error::DataShape` when the envelope or a record has an unexpected structure
pub fn extract(raw: &Value, year: i32) -> Result<Vec<DriverStanding>> {
    let lists = raw
        .pointer("/MRData/StandingsTable/StandingsLists")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::DataShape("missing MRData.StandingsTable.StandingsLists".into()))?;

    // The API returns one list per requested round; a season query yields the final one.
    let first = lists.first().ok_or(Error::NotFound { year })?;
    let entries = first
        .get("DriverStandings")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::DataShape("standings list has no DriverStandings array".into()))?;
    if entries.is_empty() {
        return Err(Error::NotFound { year });
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            serde_json::from_value::<DriverStanding>(e.clone())
                .map_err(|err| Error::DataShape(format!("standings record #{}: {}", i, err)))
        })
        .collect()
}

fn project<F>(records: &[DriverStanding], field: &'static str, get: F) -> Result<Vec<String>>
where
    F: Fn(&DriverStanding) -> Option<String>,
{
    records
        .iter()
        .enumerate()
        .map(|(index, r)| get(r).ok_or(Error::FieldMissing { index, field }))
        .collect()
}

fn driver_field<'a>(
    r: &'a DriverStanding,
    get: impl Fn(&'a Driver) -> Option<&'a String>,
) -> Option<&'a String> {
    r.driver.as_ref().and_then(get)
}

fn non_empty(s: &Option<String>) -> Option<&String> {
    s.as_ref().filter(|s| !s.is_empty())
}

/// Finishing position: numeric `position`, else textual `positionText`.
pub fn positions(records: &[DriverStanding]) -> Result<Vec<String>> {
    project(records, "position", |r| {
        let candidates = [&r.position, &r.position_text];
        candidates.into_iter().find_map(non_empty).cloned()
    })
}

/// `"{givenName} {familyName}"`.
pub fn driver_names(records: &[DriverStanding]) -> Result<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| -> Result<String> {
            let given = driver_field(r, |d| d.given_name.as_ref()).ok_or(Error::FieldMissing {
                index,
                field: "Driver.givenName",
            })?;
            let family = driver_field(r, |d| d.family_name.as_ref()).ok_or(Error::FieldMissing {
                index,
                field: "Driver.familyName",
            })?;
            Ok(format!("{} {}", given, family))
        })
        .collect()
}

pub fn nationalities(records: &[DriverStanding]) -> Result<Vec<String>> {
    project(records, "Driver.nationality", |r| {
        driver_field(r, |d| d.nationality.as_ref()).cloned()
    })
}

/// Name of the first listed constructor. Drivers who switched teams mid-season
/// are shown with the team they started with.
pub fn constructors(records: &[DriverStanding]) -> Result<Vec<String>> {
    project(records, "Constructors[0].name", |r| {
        r.constructors
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.name.clone())
    })
}

pub fn points(records: &[DriverStanding]) -> Result<Vec<String>> {
    project(records, "points", |r| r.points.clone())
}

pub fn wins(records: &[DriverStanding]) -> Result<Vec<String>> {
    project(records, "wins", |r| r.wins.clone())
}
