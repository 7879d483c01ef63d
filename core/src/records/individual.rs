use serde::Serialize;

use super::{AthleteReservation, CoachReservation, Fields, FromFields};
use crate::enums::{MemberStatus, ReservationType};
use crate::error::ParseError;

/// An item of the mixed `individual` reservation list.
///
/// The API does not tag these items. An item is a coach when its `Level` is
/// exactly `"Coach"` or, failing that, its `ReservationType` is exactly
/// `"coach"`; everything else is an athlete. The level check runs first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IndividualReservation {
    Athlete(AthleteReservation),
    Coach(CoachReservation),
}

impl IndividualReservation {
    /// Which record an item will be read as.
    pub fn classify(fields: &Fields<'_>) -> ReservationType {
        let is_exactly = |key: &str, expected: &str| {
            fields
                .get(key)
                .and_then(|v| v.as_str())
                .is_some_and(|s| s == expected)
        };

        if is_exactly("Level", "Coach") || is_exactly("ReservationType", "coach") {
            ReservationType::Coach
        } else {
            ReservationType::Athlete
        }
    }

    pub fn reservation_type(&self) -> ReservationType {
        match self {
            IndividualReservation::Athlete(_) => ReservationType::Athlete,
            IndividualReservation::Coach(_) => ReservationType::Coach,
        }
    }

    pub fn member_id(&self) -> &str {
        match self {
            IndividualReservation::Athlete(a) => &a.member_id,
            IndividualReservation::Coach(c) => &c.member_id,
        }
    }

    pub fn status(&self) -> MemberStatus {
        match self {
            IndividualReservation::Athlete(a) => a.status,
            IndividualReservation::Coach(c) => c.status,
        }
    }

    pub fn full_name(&self) -> String {
        match self {
            IndividualReservation::Athlete(a) => a.full_name(),
            IndividualReservation::Coach(c) => c.full_name(),
        }
    }

    pub fn can_compete(&self) -> bool {
        match self {
            IndividualReservation::Athlete(a) => a.can_compete(),
            IndividualReservation::Coach(c) => c.can_compete(),
        }
    }

    pub fn as_athlete(&self) -> Option<&AthleteReservation> {
        match self {
            IndividualReservation::Athlete(a) => Some(a),
            IndividualReservation::Coach(_) => None,
        }
    }

    pub fn as_coach(&self) -> Option<&CoachReservation> {
        match self {
            IndividualReservation::Coach(c) => Some(c),
            IndividualReservation::Athlete(_) => None,
        }
    }
}

impl FromFields for IndividualReservation {
    const RECORD: &'static str = "IndividualReservation";

    fn read(fields: Fields<'_>) -> Result<Self, ParseError> {
        let record = match Self::classify(&fields) {
            ReservationType::Coach => {
                let coach = Fields::new(CoachReservation::RECORD, fields.map());
                IndividualReservation::Coach(CoachReservation::read(coach)?)
            }
            _ => {
                let athlete = Fields::new(AthleteReservation::RECORD, fields.map());
                IndividualReservation::Athlete(AthleteReservation::read(athlete)?)
            }
        };
        Ok(record)
    }
}
