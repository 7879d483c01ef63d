//! Tolerant reads over the API's loosely-typed field maps.
//!
//! # Design
//! The API is inconsistent about types: ids arrive as numbers or strings,
//! flags as booleans, `0`/`1` or `"Y"`, optional text as `""` instead of
//! null. `Fields` applies one set of rules for all records:
//!
//! - required values that are missing, null or blank fail with
//!   `ParseError::MissingField`;
//! - optional text walks an alias chain and treats blank as absent;
//! - flags default to `false` when the key is absent;
//! - dates that are empty or malformed are absent, never an error. Each
//!   swallowed date is reported through `tracing` at debug level.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use crate::enums::WireEnum;
use crate::error::ParseError;

/// Wire format of bare calendar dates (month first, four-digit year).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

// `%#z` also takes `Z` and offsets without a colon (`+0000`).
const OFFSET_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a bare calendar date such as `03/04/1999`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let year = raw.rsplit('/').next()?;
    if year.len() != 4 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Parse a timestamp in any of the ISO-8601 shapes the API emits. Naive
/// values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_TIMESTAMP_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Text of a scalar value; blank strings, null and containers are absent.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Truthiness of a wire flag: booleans, non-zero numbers, and the usual
/// affirmative strings.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "t" | "on"
        ),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
    }
}

/// Read-only view of one item's fields, tagged with the record being built
/// so errors can name it.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    record: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(record: &'static str, map: &'a Map<String, Value>) -> Self {
        Self { record, map }
    }

    pub fn from_value(record: &'static str, value: &'a Value) -> Result<Self, ParseError> {
        value
            .as_object()
            .map(|map| Self::new(record, map))
            .ok_or(ParseError::NotAnObject { record })
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// Non-null value under `key`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn missing(&self, field: &'static str) -> ParseError {
        ParseError::MissingField {
            record: self.record,
            field,
        }
    }

    fn invalid(&self, field: &'static str, reason: impl Into<String>) -> ParseError {
        ParseError::InvalidField {
            record: self.record,
            field,
            reason: reason.into(),
        }
    }

    /// Required text, returned exactly as sent.
    pub fn required_str(&self, key: &'static str) -> Result<String, ParseError> {
        self.text(key).ok_or_else(|| self.missing(key))
    }

    /// Required identifier; numbers and numeric strings are both accepted.
    pub fn required_id(&self, key: &'static str) -> Result<String, ParseError> {
        self.optional_id(&[key]).ok_or_else(|| self.missing(key))
    }

    /// First non-blank text among `keys`.
    pub fn optional_str(&self, keys: &[&'static str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// First non-blank identifier among `keys`, trimmed.
    pub fn optional_id(&self, keys: &[&'static str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.text(key))
            .map(|id| id.trim().to_string())
    }

    fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_text)
    }

    /// Truthy coercion; an absent key is `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.flag_or(key, false)
    }

    /// Truthy coercion with an explicit default for absent keys.
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, truthy)
    }

    /// A list of strings, sent either as a JSON array or comma-separated.
    pub fn string_list(&self, key: &'static str) -> Result<Vec<String>, ParseError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()),
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| !item.is_null())
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(self.invalid(key, format!("unexpected list item {other}"))),
                })
                .collect(),
            Some(other) => Err(self.invalid(key, format!("expected a list, got {other}"))),
        }
    }

    /// Array under `key`, or `None` when the key is absent.
    pub fn array(&self, key: &'static str) -> Result<Option<&'a Vec<Value>>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(self.invalid(key, format!("expected an array, got {other}"))),
        }
    }

    /// Nested objects under `key`; absent means none.
    pub fn objects(&self, key: &'static str) -> Result<Vec<&'a Map<String, Value>>, ParseError> {
        let Some(items) = self.array(key)? else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| {
                item.as_object()
                    .ok_or_else(|| self.invalid(key, "expected an array of objects"))
            })
            .collect()
    }

    /// Bare calendar date under `key`.
    pub fn date(&self, key: &'static str) -> Option<NaiveDate> {
        let raw = self.text(key)?;
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            debug!(record = self.record, field = key, value = %raw, "discarding unparseable date");
        }
        parsed
    }

    /// Timestamp under `key`.
    pub fn timestamp(&self, key: &'static str) -> Option<DateTime<Utc>> {
        let raw = self.text(key)?;
        let parsed = parse_timestamp(&raw);
        if parsed.is_none() {
            debug!(record = self.record, field = key, value = %raw, "discarding unparseable timestamp");
        }
        parsed
    }

    /// Enum value that must be present and recognized.
    pub fn required_enum<E: WireEnum>(&self, key: &'static str) -> Result<E, ParseError> {
        self.optional_enum(key)?.ok_or_else(|| self.missing(key))
    }

    /// Enum value that may be absent or blank, but must be recognized when
    /// present.
    pub fn optional_enum<E: WireEnum>(&self, key: &'static str) -> Result<Option<E>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => E::parse(s).map(Some),
            Some(other) => Err(self.invalid(key, format!("expected a string, got {other}"))),
        }
    }

    /// Enum value where anything unrecognized is simply absent.
    pub fn lenient_enum<E: WireEnum>(&self, key: &'static str) -> Option<E> {
        self.text(key).and_then(|raw| E::parse_lenient(&raw))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::{Discipline, Gender};

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn bare_date_is_month_first() {
        // Month first even though one written example reads 03/04/1999 as 3 April.
        assert_eq!(parse_date("03/04/1999"), NaiveDate::from_ymd_opt(1999, 3, 4));
        assert_eq!(parse_date("12/31/2005"), NaiveDate::from_ymd_opt(2005, 12, 31));
    }

    #[test]
    fn bare_date_rejects_other_shapes() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("1999-03-04"), None);
        assert_eq!(parse_date("13/01/1999"), None);
        assert_eq!(parse_date("03/04/99"), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn timestamps_accept_iso_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
            .and_utc();
        assert_eq!(parse_timestamp("2024-02-10T14:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T09:30:00-05:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10 14:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T14:30:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T14:30:00+0000"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T09:30:00-0500"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T14:30Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T16:30+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-10T14:30"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-02-10"),
            NaiveDate::from_ymd_opt(2024, 2, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .map(|n| n.and_utc())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn required_fields() {
        let m = map(json!({"MemberID": 123, "FirstName": "Ana", "LastName": "", "Note": null}));
        let f = Fields::new("Test", &m);
        assert_eq!(f.required_id("MemberID").unwrap(), "123");
        assert_eq!(f.required_str("FirstName").unwrap(), "Ana");
        assert_eq!(
            f.required_str("LastName").unwrap_err(),
            ParseError::MissingField {
                record: "Test",
                field: "LastName"
            }
        );
        assert!(f.required_str("Note").is_err());
        assert!(f.required_str("Absent").is_err());
    }

    #[test]
    fn optional_text_uses_alias_chain_and_drops_blanks() {
        let m = map(json!({"ClubContactName": "  ", "ClubContact": "Dana Lee", "ClubAbbrev": ""}));
        let f = Fields::new("Test", &m);
        assert_eq!(
            f.optional_str(&["ClubContactName", "ClubContact"]).as_deref(),
            Some("Dana Lee")
        );
        assert_eq!(f.optional_str(&["ClubAbbrev"]), None);
        assert_eq!(f.optional_str(&["Missing"]), None);
    }

    #[test]
    fn flags_coerce_truthy_values() {
        let m = map(json!({
            "A": true, "B": 1, "C": "Y", "D": "false", "E": 0, "F": "", "G": "TRUE"
        }));
        let f = Fields::new("Test", &m);
        assert!(f.flag("A"));
        assert!(f.flag("B"));
        assert!(f.flag("C"));
        assert!(!f.flag("D"));
        assert!(!f.flag("E"));
        assert!(!f.flag("F"));
        assert!(f.flag("G"));
        assert!(!f.flag("Absent"));
        assert!(f.flag_or("Absent", true));
    }

    #[test]
    fn string_lists() {
        let m = map(json!({"A": ["FIG", "NGJ"], "B": "FIG, NGJ,", "C": 5, "D": [1, null]}));
        let f = Fields::new("Test", &m);
        assert_eq!(f.string_list("A").unwrap(), ["FIG", "NGJ"]);
        assert_eq!(f.string_list("B").unwrap(), ["FIG", "NGJ"]);
        assert!(f.string_list("Absent").unwrap().is_empty());
        assert!(matches!(
            f.string_list("C"),
            Err(ParseError::InvalidField { field: "C", .. })
        ));
        assert_eq!(f.string_list("D").unwrap(), ["1"]);
    }

    #[test]
    fn malformed_dates_are_absent() {
        let m = map(json!({"DOB": "31/31/1999", "Empty": "", "Good": "01/02/2003"}));
        let f = Fields::new("Test", &m);
        assert_eq!(f.date("DOB"), None);
        assert_eq!(f.date("Empty"), None);
        assert_eq!(f.date("Missing"), None);
        assert_eq!(f.date("Good"), NaiveDate::from_ymd_opt(2003, 1, 2));
    }

    #[test]
    fn enums() {
        let m = map(json!({"Discipline": "wag", "Gender": "?", "Blank": "", "Num": 3}));
        let f = Fields::new("Test", &m);
        assert_eq!(
            f.required_enum::<Discipline>("Discipline").unwrap(),
            Discipline::WomensArtistic
        );
        assert_eq!(f.lenient_enum::<Gender>("Gender"), None);
        assert_eq!(f.optional_enum::<Discipline>("Blank").unwrap(), None);
        assert!(f.required_enum::<Discipline>("Blank").is_err());
        assert!(f.optional_enum::<Gender>("Gender").is_err());
        assert!(f.optional_enum::<Gender>("Num").is_err());
    }

    #[test]
    fn non_object_is_rejected() {
        let err = Fields::from_value("Test", &json!([1, 2])).unwrap_err();
        assert_eq!(err, ParseError::NotAnObject { record: "Test" });
    }
}
