use serde::Deserialize;

/// Earliest Formula 1 world championship season.
pub const FIRST_SEASON: i32 = 1950;

/// One entry of `StandingsLists[0].DriverStandings`.
///
/// Every field is optional so that a malformed record is reported by the
/// projection that needs the field (as `Error::FieldMissing`) rather than
/// failing the whole decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DriverStanding {
    #[serde(default, deserialize_with = "de_opt_string_from_string_or_number")]
    pub position: Option<String>,
    /// Textual rank; the only rank present for excluded or disqualified drivers.
    #[serde(
        rename = "positionText",
        default,
        deserialize_with = "de_opt_string_from_string_or_number"
    )]
    pub position_text: Option<String>,
    /// Kept as text: half points make it fractional in some seasons.
    #[serde(default, deserialize_with = "de_opt_string_from_string_or_number")]
    pub points: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_string_or_number")]
    pub wins: Option<String>,
    #[serde(rename = "Driver", default)]
    pub driver: Option<Driver>,
    /// Teams the driver raced for during the season, in API order.
    #[serde(rename = "Constructors", default)]
    pub constructors: Option<Vec<Constructor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Constructor {
    pub name: Option<String>,
}

/// Serde helper: the API serializes numbers as strings, but be lenient and
/// accept JSON numbers too. `null` maps to `None`.
fn de_opt_string_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string, a number or null")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(s.to_string()))
        }

        fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(s))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
