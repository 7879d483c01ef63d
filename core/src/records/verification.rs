use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::fields::{truthy, value_text};
use super::{full_name, Fields, FromFields};
use crate::enums::{Discipline, MemberStatus, MemberType, WireEnum};
use crate::error::ParseError;

/// Membership standing of one person, as returned by the batch verification
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub member_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub member_type: Option<MemberType>,
    pub status: MemberStatus,
    pub disciplines: Vec<Discipline>,
    pub expiration_date: Option<NaiveDate>,
    /// Eligibility as stated by the API, when it states one.
    pub eligible: Option<bool>,
    pub clubs: Vec<ClubMembership>,
}

/// One club a verified member belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubMembership {
    pub id: String,
    pub abbrev: Option<String>,
    pub name: Option<String>,
    pub status: Option<MemberStatus>,
    pub is_international: bool,
}

// The API sends clubs as parallel arrays; row i of each describes the same
// membership.
const CLUB_IDS: &str = "ClubIDs";
const CLUB_ABBREVS: &str = "ClubAbbrevs";
const CLUB_NAMES: &str = "ClubNames";
const CLUB_STATUSES: &str = "ClubStatuses";
const CLUB_INTERNATIONAL: &str = "ClubInternational";

impl FromFields for VerificationResult {
    const RECORD: &'static str = "VerificationResult";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        let disciplines = f
            .string_list("Discipline")?
            .iter()
            .map(|code| Discipline::parse(code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            member_id: f.required_id("MemberID")?,
            first_name: f.optional_str(&["FirstName"]),
            last_name: f.optional_str(&["LastName"]),
            date_of_birth: f.date("DOB"),
            member_type: f.optional_enum("MemberType")?,
            status: f.required_enum("Status")?,
            disciplines,
            expiration_date: f.date("ExpirationDate"),
            eligible: f.get("Eligible").map(truthy),
            clubs: club_memberships(&f)?,
        })
    }
}

/// Zip the parallel club columns into rows. Absent columns contribute
/// nothing; a present column must match `ClubIDs` in length.
fn club_memberships(f: &Fields<'_>) -> Result<Vec<ClubMembership>, ParseError> {
    let Some(ids) = f.array(CLUB_IDS)? else {
        for key in [CLUB_ABBREVS, CLUB_NAMES, CLUB_STATUSES, CLUB_INTERNATIONAL] {
            column(f, key, 0)?;
        }
        return Ok(Vec::new());
    };

    let abbrevs = column(f, CLUB_ABBREVS, ids.len())?;
    let names = column(f, CLUB_NAMES, ids.len())?;
    let statuses = column(f, CLUB_STATUSES, ids.len())?;
    let international = column(f, CLUB_INTERNATIONAL, ids.len())?;

    ids.iter()
        .enumerate()
        .map(|(row, id)| {
            let id = value_text(id).ok_or_else(|| ParseError::InvalidField {
                record: f.record(),
                field: CLUB_IDS,
                reason: format!("entry {row} is not an id"),
            })?;
            let status = cell(statuses, row)
                .and_then(value_text)
                .map(|raw| MemberStatus::parse(&raw))
                .transpose()?;

            Ok(ClubMembership {
                id: id.trim().to_string(),
                abbrev: cell(abbrevs, row).and_then(value_text),
                name: cell(names, row).and_then(value_text),
                status,
                is_international: cell(international, row).is_some_and(truthy),
            })
        })
        .collect()
}

fn column<'a>(
    f: &Fields<'a>,
    key: &'static str,
    expected: usize,
) -> Result<Option<&'a Vec<Value>>, ParseError> {
    let Some(values) = f.array(key)? else {
        return Ok(None);
    };
    if values.len() != expected {
        return Err(ParseError::MisalignedColumns {
            record: f.record(),
            field: key,
            reference: CLUB_IDS,
            expected,
            found: values.len(),
        });
    }
    Ok(Some(values))
}

fn cell(column: Option<&Vec<Value>>, row: usize) -> Option<&Value> {
    column.and_then(|values| values.get(row))
}

impl VerificationResult {
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(full_name(first, last)),
            _ => None,
        }
    }

    /// The API's own verdict when given, otherwise whether the status
    /// permits participation.
    pub fn is_eligible(&self) -> bool {
        self.eligible
            .unwrap_or_else(|| self.status.can_participate())
    }

    pub fn belongs_to_club(&self, club_id: &str) -> bool {
        self.clubs.iter().any(|c| c.id == club_id)
    }
}
