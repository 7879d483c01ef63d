use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{full_name, Fields, FromFields};
use crate::enums::{Discipline, Gender, MemberStatus};
use crate::error::ParseError;

/// A group (acro pair, rhythmic group, GFA team) entered into a sanction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReservation {
    pub group_id: String,
    pub name: Option<String>,
    pub club_id: Option<String>,
    pub club_abbrev: Option<String>,
    pub club_name: Option<String>,
    pub discipline: Option<Discipline>,
    pub level: Option<String>,
    pub scratched: bool,
    pub scratch_date: Option<DateTime<Utc>>,
    /// Members in the order the API lists them.
    pub athletes: Vec<GroupAthlete>,
}

/// One member of a [`GroupReservation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupAthlete {
    pub member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub status: Option<MemberStatus>,
}

impl FromFields for GroupReservation {
    const RECORD: &'static str = "GroupReservation";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        let athletes = f
            .objects("Athletes")?
            .into_iter()
            .map(GroupAthlete::from_fields)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            group_id: f.required_id("GroupID")?,
            name: f.optional_str(&["GroupName", "Name"]),
            club_id: f.optional_id(&["ClubID"]),
            club_abbrev: f.optional_str(&["ClubAbbrev"]),
            club_name: f.optional_str(&["ClubName"]),
            discipline: f.optional_enum("Discipline")?,
            level: f.optional_str(&["Level"]),
            scratched: f.flag("Scratched"),
            scratch_date: f.timestamp("ScratchDate"),
            athletes,
        })
    }
}

impl FromFields for GroupAthlete {
    const RECORD: &'static str = "GroupAthlete";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            member_id: f.required_id("MemberID")?,
            first_name: f.required_str("FirstName")?,
            last_name: f.required_str("LastName")?,
            date_of_birth: f.date("DOB"),
            gender: f.lenient_enum("Gender"),
            status: f.optional_enum("Status")?,
        })
    }
}

impl GroupReservation {
    pub fn can_compete(&self) -> bool {
        !self.scratched && self.athletes.iter().all(GroupAthlete::can_participate)
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.athletes.iter().map(|a| a.member_id.as_str()).collect()
    }
}

impl GroupAthlete {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// False when the status is unknown.
    pub fn can_participate(&self) -> bool {
        self.status.is_some_and(MemberStatus::can_participate)
    }
}
