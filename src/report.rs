use crate::error::Result;
use crate::models::DriverStanding;
use crate::standings;
use std::fmt;

/// Column headers, in display order.
pub const HEADERS: [&str; 6] = [
    "POS",
    "Driver",
    "Nationality",
    "Constructor",
    "Points",
    "Wins",
];

/// One driver's line in the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub position: String,
    pub driver: String,
    pub nationality: String,
    pub constructor: String,
    pub points: String,
    pub wins: String,
}

impl StandingsRow {
    /// Cells in `HEADERS` order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.position.as_str(),
            self.driver.as_str(),
            self.nationality.as_str(),
            self.constructor.as_str(),
            self.points.as_str(),
            self.wins.as_str(),
        ]
    }
}

/// Driver standings for one season, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsTable {
    rows: Vec<StandingsRow>,
}

impl StandingsTable {
    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the table by zipping the six column projections positionally.
///
/// No sorting, filtering or deduplication: row `i` is record `i`.
pub fn assemble(records: &[DriverStanding]) -> Result<StandingsTable> {
    let positions = standings::positions(records)?;
    let names = standings::driver_names(records)?;
    let nationalities = standings::nationalities(records)?;
    let constructors = standings::constructors(records)?;
    let points = standings::points(records)?;
    let wins = standings::wins(records)?;

    let rows = positions
        .into_iter()
        .zip(names)
        .zip(nationalities)
        .zip(constructors)
        .zip(points)
        .zip(wins)
        .map(
            |(((((position, driver), nationality), constructor), points), wins)| StandingsRow {
                position,
                driver,
                nationality,
                constructor,
                points,
                wins,
            },
        )
        .collect();

    Ok(StandingsTable { rows })
}

/// Left-aligned, space-separated columns with a header line and no index column.
impl fmt::Display for StandingsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Width in chars, not bytes, so names like "Räikkönen" line up.
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row.cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let line = |cells: [&str; 6]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(c, w)| format!("{:<w$}", c, w = w))
                .collect();
            padded.join(" ").trim_end().to_string()
        };

        write!(f, "{}", line(HEADERS))?;
        for row in &self.rows {
            write!(f, "\n{}", line(row.cells()))?;
        }
        Ok(())
    }
}
