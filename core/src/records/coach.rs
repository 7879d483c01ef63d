use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{full_name, Fields, FromFields};
use crate::enums::{Discipline, MemberStatus};
use crate::error::ParseError;

/// A coach entered into a sanction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachReservation {
    pub member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub club_id: Option<String>,
    pub club_abbrev: Option<String>,
    pub club_name: Option<String>,
    pub discipline: Option<Discipline>,
    pub status: MemberStatus,
    pub scratched: bool,
    pub scratch_date: Option<DateTime<Utc>>,
    pub safe_sport_expiration: Option<NaiveDate>,
    pub background_check_expiration: Option<NaiveDate>,
}

impl FromFields for CoachReservation {
    const RECORD: &'static str = "CoachReservation";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            member_id: f.required_id("MemberID")?,
            first_name: f.required_str("FirstName")?,
            last_name: f.required_str("LastName")?,
            email: f.optional_str(&["Email"]),
            club_id: f.optional_id(&["ClubID"]),
            club_abbrev: f.optional_str(&["ClubAbbrev"]),
            club_name: f.optional_str(&["ClubName"]),
            discipline: f.optional_enum("Discipline")?,
            status: f.required_enum("Status")?,
            scratched: f.flag("Scratched"),
            scratch_date: f.timestamp("ScratchDate"),
            safe_sport_expiration: f.date("SafeSportExpiration"),
            background_check_expiration: f.date("BackgroundCheckExpiration"),
        })
    }
}

impl CoachReservation {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    pub fn can_compete(&self) -> bool {
        self.status.can_participate() && !self.scratched
    }

    /// Safe Sport training is on file and does not lapse before `on`.
    pub fn safe_sport_current(&self, on: NaiveDate) -> bool {
        self.safe_sport_expiration.is_some_and(|exp| exp >= on)
    }

    /// Background check is on file and does not lapse before `on`.
    pub fn background_check_current(&self, on: NaiveDate) -> bool {
        self.background_check_expiration.is_some_and(|exp| exp >= on)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_and_checks_expirations() {
        let coach = CoachReservation::from_value(&json!({
            "MemberID": "555",
            "FirstName": "Lee",
            "LastName": "Park",
            "Email": "",
            "Status": "Pending",
            "Discipline": "",
            "SafeSportExpiration": "06/30/2025",
            "BackgroundCheckExpiration": "garbage",
        }))
        .unwrap();

        assert_eq!(coach.email, None);
        assert_eq!(coach.discipline, None);
        assert!(coach.can_compete());
        assert!(coach.safe_sport_current(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
        assert!(!coach.safe_sport_current(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
        assert!(!coach.background_check_current(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()));
    }

    #[test]
    fn status_is_required() {
        let err = CoachReservation::from_value(&json!({
            "MemberID": "555",
            "FirstName": "Lee",
            "LastName": "Park",
        }))
        .unwrap_err();
        assert!(matches!(err, ParseError::MissingField { field: "Status", .. }));
    }
}
