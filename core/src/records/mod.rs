//! Immutable records built from the API's field maps.
//!
//! # Design
//! Every record implements `FromFields`: a single `read` over a `Fields`
//! view, with `from_fields` / `from_value` / `list` provided on top. Records
//! are plain data with public fields; derived facts (`full_name`,
//! `can_compete`, ...) are methods so they always agree with the fields.

use serde_json::{Map, Value};

use crate::error::ParseError;

mod athlete;
mod club;
mod coach;
mod discipline;
pub mod fields;
mod group;
mod individual;
mod judge;
mod verification;

pub use athlete::AthleteReservation;
pub use club::ClubReservation;
pub use coach::CoachReservation;
pub use discipline::DisciplineData;
pub use fields::Fields;
pub use group::{GroupAthlete, GroupReservation};
pub use individual::IndividualReservation;
pub use judge::JudgeReservation;
pub use verification::{ClubMembership, VerificationResult};

/// Construction of a record from one item of an API payload.
pub trait FromFields: Sized {
    /// Record name used in error messages.
    const RECORD: &'static str;

    fn read(fields: Fields<'_>) -> Result<Self, ParseError>;

    fn from_fields(map: &Map<String, Value>) -> Result<Self, ParseError> {
        Self::read(Fields::new(Self::RECORD, map))
    }

    fn from_value(value: &Value) -> Result<Self, ParseError> {
        Self::read(Fields::from_value(Self::RECORD, value)?)
    }

    /// Every item of `values`, failing on the first bad one.
    fn list(values: &[Value]) -> Result<Vec<Self>, ParseError> {
        values.iter().map(Self::from_value).collect()
    }
}

/// First and last name joined by a single space, as sent.
pub(crate) fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}
