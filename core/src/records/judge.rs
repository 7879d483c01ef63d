use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{full_name, Fields, FromFields};
use crate::enums::{Discipline, MemberStatus};
use crate::error::ParseError;

/// A judge entered into a sanction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeReservation {
    pub member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub discipline: Option<Discipline>,
    pub status: MemberStatus,
    pub certifications: Vec<String>,
    pub level: Option<String>,
    pub scratched: bool,
    pub scratch_date: Option<DateTime<Utc>>,
    pub safe_sport_expiration: Option<NaiveDate>,
}

impl FromFields for JudgeReservation {
    const RECORD: &'static str = "JudgeReservation";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            member_id: f.required_id("MemberID")?,
            first_name: f.required_str("FirstName")?,
            last_name: f.required_str("LastName")?,
            email: f.optional_str(&["Email"]),
            discipline: f.optional_enum("Discipline")?,
            status: f.required_enum("Status")?,
            certifications: f.string_list("Certification")?,
            level: f.optional_str(&["JudgeLevel", "Level"]),
            scratched: f.flag("Scratched"),
            scratch_date: f.timestamp("ScratchDate"),
            safe_sport_expiration: f.date("SafeSportExpiration"),
        })
    }
}

impl JudgeReservation {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    pub fn can_compete(&self) -> bool {
        self.status.can_participate() && !self.scratched
    }

    /// Exact, case-sensitive match against the certification list.
    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications.iter().any(|c| c == certification)
    }
}
