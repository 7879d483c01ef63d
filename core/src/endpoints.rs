//! One type per API route.
//!
//! # Design
//! An `Endpoint` knows its path, its query string, and how to read the
//! success payload. It knows nothing about hosts, credentials or status
//! codes; `UsaGymClient` adds those when it builds the `HttpRequest` and
//! checks the `HttpResponse`. Success bodies nest the payload under `data`,
//! which the default `parse_body` unwraps.

use std::marker::PhantomData;

use chrono::NaiveDate;
use serde_json::Value;

use crate::enums::{MemberType, ReservationType};
use crate::error::ApiError;
use crate::records::fields::{truthy, DATE_FORMAT};
use crate::records::{
    AthleteReservation, ClubReservation, CoachReservation, DisciplineData, FromFields,
    GroupReservation, IndividualReservation, JudgeReservation, VerificationResult,
};

/// A single API route and the shape of its answer.
pub trait Endpoint {
    type Output;

    /// Path below the base URL, one unencoded segment per entry.
    fn path_segments(&self) -> Vec<String>;

    /// Query parameters, unencoded.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Read the payload found under the `data` key.
    fn parse_data(&self, data: &Value) -> Result<Self::Output, ApiError>;

    /// Read a decoded 2xx body.
    fn parse_body(&self, body: &Value) -> Result<Self::Output, ApiError> {
        let data = body
            .get("data")
            .ok_or_else(|| ApiError::Deserialization("response has no `data` envelope".to_string()))?;
        self.parse_data(data)
    }
}

/// Records under `data.<key>`. A JSON object is read as its values in order;
/// null is an empty list.
fn records_under<R: FromFields>(data: &Value, key: &str) -> Result<Vec<R>, ApiError> {
    match data.get(key) {
        Some(Value::Array(items)) => Ok(R::list(items)?),
        Some(Value::Object(map)) => Ok(map
            .values()
            .map(R::from_value)
            .collect::<Result<Vec<_>, _>>()?),
        Some(Value::Null) => Ok(Vec::new()),
        Some(other) => Err(ApiError::Deserialization(format!(
            "`data.{key}` is not a list: {other}"
        ))),
        None => Err(ApiError::Deserialization(format!("response has no `data.{key}`"))),
    }
}

/// Boolean verdict under `data.<key>`.
fn flag_under(data: &Value, key: &str) -> Result<bool, ApiError> {
    data.get(key)
        .map(truthy)
        .ok_or_else(|| ApiError::Deserialization(format!("response has no `data.{key}`")))
}

fn join(values: &[String]) -> String {
    values.join(",")
}

/// `GET /test`: succeeds when the credentials are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestCredentials;

impl Endpoint for TestCredentials {
    type Output = bool;

    fn path_segments(&self) -> Vec<String> {
        vec!["test".to_string()]
    }

    fn parse_data(&self, _data: &Value) -> Result<bool, ApiError> {
        Ok(true)
    }

    // Any 2xx answer means the credentials work, whatever the body says.
    fn parse_body(&self, _body: &Value) -> Result<bool, ApiError> {
        Ok(true)
    }
}

/// `GET /discipline`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListDisciplines;

impl Endpoint for ListDisciplines {
    type Output = Vec<DisciplineData>;

    fn path_segments(&self) -> Vec<String> {
        vec!["discipline".to_string()]
    }

    fn parse_data(&self, data: &Value) -> Result<Self::Output, ApiError> {
        records_under(data, "disciplines")
    }
}

/// `GET /person/exists`: does a member with this id, last name and date of
/// birth exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonExists {
    pub member_id: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Endpoint for PersonExists {
    type Output = bool;

    fn path_segments(&self) -> Vec<String> {
        vec!["person".to_string(), "exists".to_string()]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("memberId", self.member_id.clone()),
            ("lastName", self.last_name.clone()),
            ("dob", self.date_of_birth.format(DATE_FORMAT).to_string()),
        ]
    }

    fn parse_data(&self, data: &Value) -> Result<bool, ApiError> {
        flag_under(data, "valid")
    }
}

/// Optional narrowing of a reservation listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub clubs: Vec<String>,
    pub levels: Vec<String>,
}

impl ReservationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn club(mut self, club_id: impl ToString) -> Self {
        self.clubs.push(club_id.to_string());
        self
    }

    pub fn clubs<I, S>(mut self, club_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.clubs.extend(club_ids.into_iter().map(|id| id.to_string()));
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.levels.push(level.into());
        self
    }

    pub fn levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels.extend(levels.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty() && self.levels.is_empty()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.clubs.is_empty() {
            query.push(("clubs", join(&self.clubs)));
        }
        if !self.levels.is_empty() {
            query.push(("levels", join(&self.levels)));
        }
        query
    }
}

/// A record type listed by `/sanction/{id}/reservations/{type}`.
pub trait ReservationRecord: FromFields {
    const KIND: ReservationType;
}

impl ReservationRecord for AthleteReservation {
    const KIND: ReservationType = ReservationType::Athlete;
}

impl ReservationRecord for ClubReservation {
    const KIND: ReservationType = ReservationType::Club;
}

impl ReservationRecord for CoachReservation {
    const KIND: ReservationType = ReservationType::Coach;
}

impl ReservationRecord for JudgeReservation {
    const KIND: ReservationType = ReservationType::Judge;
}

impl ReservationRecord for IndividualReservation {
    const KIND: ReservationType = ReservationType::Individual;
}

impl ReservationRecord for GroupReservation {
    const KIND: ReservationType = ReservationType::Group;
}

/// `GET /sanction/{id}/reservations/{type}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctionReservations<R> {
    pub sanction_id: u64,
    pub filter: ReservationFilter,
    record: PhantomData<fn() -> R>,
}

impl<R: ReservationRecord> SanctionReservations<R> {
    pub fn new(sanction_id: u64, filter: ReservationFilter) -> Self {
        Self {
            sanction_id,
            filter,
            record: PhantomData,
        }
    }

    pub fn kind(&self) -> ReservationType {
        R::KIND
    }
}

impl<R: ReservationRecord> Endpoint for SanctionReservations<R> {
    type Output = Vec<R>;

    fn path_segments(&self) -> Vec<String> {
        vec![
            "sanction".to_string(),
            self.sanction_id.to_string(),
            "reservations".to_string(),
            R::KIND.path_segment().to_string(),
        ]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.filter.query()
    }

    fn parse_data(&self, data: &Value) -> Result<Vec<R>, ApiError> {
        records_under(data, "reservations")
    }
}

pub type AthleteReservations = SanctionReservations<AthleteReservation>;
pub type ClubReservations = SanctionReservations<ClubReservation>;
pub type CoachReservations = SanctionReservations<CoachReservation>;
pub type JudgeReservations = SanctionReservations<JudgeReservation>;
pub type IndividualReservations = SanctionReservations<IndividualReservation>;
pub type GroupReservations = SanctionReservations<GroupReservation>;

/// `GET /sanction/{id}/verification/{memberType}?people=...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyMembers {
    pub sanction_id: u64,
    pub member_type: MemberType,
    pub member_ids: Vec<String>,
}

impl Endpoint for VerifyMembers {
    type Output = Vec<VerificationResult>;

    fn path_segments(&self) -> Vec<String> {
        vec![
            "sanction".to_string(),
            self.sanction_id.to_string(),
            "verification".to_string(),
            self.member_type.path_segment().to_string(),
        ]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("people", join(&self.member_ids))]
    }

    fn parse_data(&self, data: &Value) -> Result<Self::Output, ApiError> {
        records_under(data, "members")
    }
}

/// Whether an email check is about an individual or a group registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationSubject {
    Person,
    Group,
}

impl VerificationSubject {
    pub fn path_segment(self) -> &'static str {
        match self {
            VerificationSubject::Person => "person",
            VerificationSubject::Group => "group",
        }
    }
}

/// `GET /{sanctionId}/{person|group}/{id}/verification/coach/email/{email}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCoachEmail {
    pub sanction_id: u64,
    pub subject: VerificationSubject,
    pub id: String,
    pub email: String,
}

impl Endpoint for VerifyCoachEmail {
    type Output = bool;

    fn path_segments(&self) -> Vec<String> {
        vec![
            self.sanction_id.to_string(),
            self.subject.path_segment().to_string(),
            self.id.clone(),
            "verification".to_string(),
            "coach".to_string(),
            "email".to_string(),
            self.email.clone(),
        ]
    }

    fn parse_data(&self, data: &Value) -> Result<bool, ApiError> {
        flag_under(data, "valid")
    }
}

/// `GET /{person|group}/{id}/verification/legalContact/email/{email}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyLegalContactEmail {
    pub subject: VerificationSubject,
    pub id: String,
    pub email: String,
}

impl Endpoint for VerifyLegalContactEmail {
    type Output = bool;

    fn path_segments(&self) -> Vec<String> {
        vec![
            self.subject.path_segment().to_string(),
            self.id.clone(),
            "verification".to_string(),
            "legalContact".to_string(),
            "email".to_string(),
            self.email.clone(),
        ]
    }

    fn parse_data(&self, data: &Value) -> Result<bool, ApiError> {
        flag_under(data, "valid")
    }
}
