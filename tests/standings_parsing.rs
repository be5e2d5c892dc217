use f1_standings::report::{self, HEADERS};
use f1_standings::{Error, standings};
use serde_json::{Value, json};

fn response(entries: Value) -> Value {
    json!({
        "MRData": {
            "series": "f1",
            "limit": "30",
            "offset": "0",
            "total": "2",
            "StandingsTable": {
                "season": "2023",
                "round": "22",
                "StandingsLists": [
                    { "season": "2023", "round": "22", "DriverStandings": entries }
                ]
            }
        }
    })
}

fn entry(
    pos: &str,
    given: &str,
    family: &str,
    nat: &str,
    teams: &[&str],
    pts: &str,
    wins: &str,
) -> Value {
    let constructors: Vec<Value> = teams.iter().map(|t| json!({ "name": t })).collect();
    json!({
        "position": pos,
        "positionText": pos,
        "points": pts,
        "wins": wins,
        "Driver": { "givenName": given, "familyName": family, "nationality": nat },
        "Constructors": constructors
    })
}

#[test]
fn season_2023_two_drivers() {
    let raw = response(json!([
        {
            "position": "1", "points": "575", "wins": "19",
            "Driver": { "givenName": "Max", "familyName": "Verstappen", "nationality": "Dutch" },
            "Constructors": [ { "name": "Red Bull" } ]
        },
        {
            "position": "2", "points": "285", "wins": "2",
            "Driver": { "givenName": "Sergio", "familyName": "Perez", "nationality": "Mexican" },
            "Constructors": [ { "name": "Red Bull" } ]
        }
    ]));

    let records = standings::extract(&raw, 2023).unwrap();
    let table = report::assemble(&records).unwrap();

    assert_eq!(HEADERS, ["POS", "Driver", "Nationality", "Constructor", "Points", "Wins"]);
    let rows: Vec<[&str; 6]> = table.rows().iter().map(|r| r.cells()).collect();
    assert_eq!(
        rows,
        vec![
            ["1", "Max Verstappen", "Dutch", "Red Bull", "575", "19"],
            ["2", "Sergio Perez", "Mexican", "Red Bull", "285", "2"],
        ]
    );
}

#[test]
fn row_count_and_order_follow_the_api() {
    // Deliberately not sorted by position: the table must not reorder.
    let raw = response(json!([
        entry("3", "Charles", "Leclerc", "Monegasque", &["Ferrari"], "206", "0"),
        entry("1", "Max", "Verstappen", "Dutch", &["Red Bull"], "575", "19"),
        entry("2", "Sergio", "Perez", "Mexican", &["Red Bull"], "285", "2"),
    ]));
    let records = standings::extract(&raw, 2023).unwrap();
    let table = report::assemble(&records).unwrap();

    assert_eq!(table.len(), 3);
    let names: Vec<&str> = table.rows().iter().map(|r| r.driver.as_str()).collect();
    assert_eq!(names, ["Charles Leclerc", "Max Verstappen", "Sergio Perez"]);
}

#[test]
fn position_text_used_only_when_position_absent() {
    let raw = response(json!([
        entry("1", "Jacques", "Villeneuve", "Canadian", &["Williams"], "81", "7"),
        {
            "positionText": "D",
            "points": "78",
            "wins": "5",
            "Driver": {
                "givenName": "Michael", "familyName": "Schumacher", "nationality": "German"
            },
            "Constructors": [ { "name": "Ferrari" } ]
        }
    ]));
    let records = standings::extract(&raw, 1997).unwrap();
    assert_eq!(standings::positions(&records).unwrap(), vec!["1", "D"]);
}

#[test]
fn multi_team_driver_shows_first_constructor() {
    let raw = response(json!([entry(
        "7",
        "Daniel",
        "Ricciardo",
        "Australian",
        &["AlphaTauri", "RB F1 Team"],
        "6",
        "0"
    )]));
    let records = standings::extract(&raw, 2023).unwrap();
    let table = report::assemble(&records).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].constructor, "AlphaTauri");
}

#[test]
fn points_are_kept_verbatim() {
    let raw = response(json!([entry(
        "1",
        "Juan",
        "Fangio",
        "Argentine",
        &["Alfa Romeo"],
        "30.5",
        "3"
    )]));
    let records = standings::extract(&raw, 1951).unwrap();
    assert_eq!(standings::points(&records).unwrap(), vec!["30.5"]);
    assert_eq!(standings::wins(&records).unwrap(), vec!["3"]);
}

#[test]
fn extraction_is_idempotent() {
    let raw = response(json!([
        entry("1", "Max", "Verstappen", "Dutch", &["Red Bull"], "575", "19"),
        entry("2", "Sergio", "Perez", "Mexican", &["Red Bull"], "285", "2"),
    ]));
    let a = standings::extract(&raw, 2023).unwrap();
    let b = standings::extract(&raw, 2023).unwrap();
    assert_eq!(a, b);
    assert_eq!(standings::driver_names(&a).unwrap(), standings::driver_names(&b).unwrap());
    assert_eq!(standings::constructors(&a).unwrap(), standings::constructors(&b).unwrap());
    assert_eq!(report::assemble(&a).unwrap(), report::assemble(&b).unwrap());
}

#[test]
fn empty_standings_lists_is_not_found() {
    let raw = json!({
        "MRData": { "StandingsTable": { "season": "2031", "StandingsLists": [] } }
    });
    let err = standings::extract(&raw, 2031).unwrap_err();
    assert!(matches!(err, Error::NotFound { year: 2031 }));
    assert_eq!(err.to_string(), "No standings found for 2031.");
}

#[test]
fn malformed_record_fails_whole_table() {
    let raw = response(json!([
        entry("1", "Max", "Verstappen", "Dutch", &["Red Bull"], "575", "19"),
        {
            "position": "2", "points": "285",
            "Driver": { "givenName": "Sergio", "familyName": "Perez", "nationality": "Mexican" },
            "Constructors": [ { "name": "Red Bull" } ]
        }
    ]));
    let records = standings::extract(&raw, 2023).unwrap();
    let err = report::assemble(&records).unwrap_err();
    assert!(matches!(err, Error::FieldMissing { index: 1, field: "wins" }));
}
