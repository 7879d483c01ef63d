use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{full_name, Fields, FromFields};
use crate::enums::{Discipline, Gender, MemberStatus};
use crate::error::ParseError;

/// An athlete entered into a sanction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteReservation {
    pub member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub club_id: Option<String>,
    pub club_abbrev: Option<String>,
    pub club_name: Option<String>,
    pub level: Option<String>,
    pub discipline: Discipline,
    pub status: MemberStatus,
    pub scratched: bool,
    pub scratch_date: Option<DateTime<Utc>>,
    pub us_citizen: bool,
    pub apparatus: Vec<String>,
}

impl FromFields for AthleteReservation {
    const RECORD: &'static str = "AthleteReservation";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            member_id: f.required_id("MemberID")?,
            first_name: f.required_str("FirstName")?,
            last_name: f.required_str("LastName")?,
            date_of_birth: f.date("DOB"),
            gender: f.lenient_enum("Gender"),
            club_id: f.optional_id(&["ClubID"]),
            club_abbrev: f.optional_str(&["ClubAbbrev"]),
            club_name: f.optional_str(&["ClubName"]),
            level: f.optional_str(&["Level"]),
            discipline: f.required_enum("Discipline")?,
            status: f.required_enum("Status")?,
            scratched: f.flag("Scratched"),
            scratch_date: f.timestamp("ScratchDate"),
            us_citizen: f.flag("USCitizen"),
            apparatus: f.string_list("Apparatus")?,
        })
    }
}

impl AthleteReservation {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// Membership allows participation and the entry has not been scratched.
    pub fn can_compete(&self) -> bool {
        self.status.can_participate() && !self.scratched
    }
}
