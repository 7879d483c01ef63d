use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Fields, FromFields};
use crate::enums::MemberStatus;
use crate::error::ParseError;

/// A club entered into a sanction. Contact fields fall back to the legacy
/// key names older sanctions still return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubReservation {
    pub club_id: String,
    pub club_name: String,
    pub club_abbrev: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: Option<MemberStatus>,
    pub international: bool,
    pub scratched: bool,
    pub scratch_date: Option<DateTime<Utc>>,
}

impl FromFields for ClubReservation {
    const RECORD: &'static str = "ClubReservation";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            club_id: f.required_id("ClubID")?,
            club_name: f.required_str("ClubName")?,
            club_abbrev: f.optional_str(&["ClubAbbrev"]),
            city: f.optional_str(&["ClubCity", "City"]),
            state: f.optional_str(&["ClubState", "State"]),
            contact_name: f.optional_str(&["ClubContactName", "ClubContact"]),
            contact_email: f.optional_str(&["ClubContactEmail", "ClubEmail"]),
            contact_phone: f.optional_str(&["ClubContactPhone", "ClubPhone"]),
            status: f.optional_enum("Status")?,
            international: f.flag("International"),
            scratched: f.flag("Scratched"),
            scratch_date: f.timestamp("ScratchDate"),
        })
    }
}

impl ClubReservation {
    /// Abbreviation when the club has one, full name otherwise.
    pub fn display_name(&self) -> &str {
        self.club_abbrev.as_deref().unwrap_or(&self.club_name)
    }

    /// `City, ST` with whichever parts are known.
    pub fn location(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn legacy_contact_aliases() {
        let club = ClubReservation::from_value(&json!({
            "ClubID": 9001,
            "ClubName": "Apex Gymnastics Academy",
            "ClubAbbrev": "",
            "City": "Austin",
            "ClubState": "",
            "ClubContact": "Dana Lee",
            "ClubEmail": "dana@apex.example",
            "ClubContactPhone": "512-555-0100",
            "International": 0,
        }))
        .unwrap();

        assert_eq!(club.club_id, "9001");
        assert_eq!(club.club_abbrev, None);
        assert_eq!(club.display_name(), "Apex Gymnastics Academy");
        assert_eq!(club.city.as_deref(), Some("Austin"));
        assert_eq!(club.state, None);
        assert_eq!(club.location().as_deref(), Some("Austin"));
        assert_eq!(club.contact_name.as_deref(), Some("Dana Lee"));
        assert_eq!(club.contact_email.as_deref(), Some("dana@apex.example"));
        assert_eq!(club.contact_phone.as_deref(), Some("512-555-0100"));
        assert_eq!(club.status, None);
        assert!(!club.international);
        assert!(!club.scratched);
    }

    #[test]
    fn current_contact_name_wins_over_legacy() {
        let club = ClubReservation::from_value(&json!({
            "ClubID": "77",
            "ClubName": "North Stars",
            "ClubAbbrev": "NSG",
            "ClubCity": "Fargo",
            "ClubState": "ND",
            "ClubContactName": "Pat Kim",
            "ClubContact": "Old Name",
            "Status": "Active",
        }))
        .unwrap();
        assert_eq!(club.contact_name.as_deref(), Some("Pat Kim"));
        assert_eq!(club.display_name(), "NSG");
        assert_eq!(club.location().as_deref(), Some("Fargo, ND"));
        assert_eq!(club.status, Some(MemberStatus::Active));
    }

    #[test]
    fn club_name_is_required() {
        let err = ClubReservation::from_value(&json!({"ClubID": 1})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { field: "ClubName", .. }));
    }
}
