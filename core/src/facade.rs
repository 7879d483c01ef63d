//! Hierarchical entry point over `UsaGymClient` and a `Transport`.
//!
//! ```no_run
//! use usagym_core::{ReservationFilter, UsaGym};
//!
//! # fn main() -> Result<(), usagym_core::ApiError> {
//! let gym = UsaGym::new("username", "password")?;
//! let athletes = gym
//!     .sanctions(58012)
//!     .reservations()
//!     .athletes(ReservationFilter::new().level("10"))?;
//! for athlete in athletes.iter().filter(|a| a.can_compete()) {
//!     println!("{}", athlete.full_name());
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::client::UsaGymClient;
use crate::config::ClientConfig;
use crate::endpoints::{
    Endpoint, ListDisciplines, PersonExists, ReservationFilter, ReservationRecord,
    SanctionReservations, TestCredentials, VerificationSubject, VerifyCoachEmail,
    VerifyLegalContactEmail, VerifyMembers,
};
use crate::enums::MemberType;
use crate::error::ApiError;
use crate::records::{
    AthleteReservation, ClubReservation, CoachReservation, DisciplineData, GroupReservation,
    IndividualReservation, JudgeReservation, VerificationResult,
};
use crate::transport::{Transport, UreqTransport};

/// Connector for the USA Gymnastics API.
#[derive(Debug, Clone)]
pub struct UsaGym<T = UreqTransport> {
    client: UsaGymClient,
    transport: T,
}

impl UsaGym<UreqTransport> {
    /// Connect to the production API with the default timeout.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ApiError> {
        Self::from_config(ClientConfig::new(username, password))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        Self::with_transport(config, UreqTransport::new())
    }

    /// Configuration from `USAGYM_*` environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_config(ClientConfig::from_env()?)
    }
}

impl<T: Transport> UsaGym<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        Ok(Self {
            client: UsaGymClient::new(config)?,
            transport,
        })
    }

    pub fn client(&self) -> &UsaGymClient {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.client.config().timeout
    }

    /// Copy of this connector whose requests use `timeout`; `self` keeps
    /// its own.
    pub fn with_timeout(&self, timeout: Duration) -> Self
    where
        T: Clone,
    {
        Self {
            client: self.client.with_timeout(timeout),
            transport: self.transport.clone(),
        }
    }

    /// Build, execute and parse one endpoint.
    pub fn send<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output, ApiError> {
        let request = self.client.build(endpoint)?;
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");

        self.client
            .parse(endpoint, response)
            .inspect_err(|e| warn!(status = ?e.status(), error = %e, "request failed"))
    }

    /// Whether the configured credentials are accepted.
    pub fn test_credentials(&self) -> Result<bool, ApiError> {
        self.send(&TestCredentials)
    }

    pub fn disciplines(&self) -> Disciplines<'_, T> {
        Disciplines { gym: self }
    }

    pub fn person(&self) -> People<'_, T> {
        People { gym: self }
    }

    pub fn group(&self) -> Groups<'_, T> {
        Groups { gym: self }
    }

    pub fn sanctions(&self, sanction_id: u64) -> Sanction<'_, T> {
        Sanction {
            gym: self,
            sanction_id,
        }
    }
}

/// `/discipline`.
pub struct Disciplines<'a, T> {
    gym: &'a UsaGym<T>,
}

impl<T: Transport> Disciplines<'_, T> {
    pub fn list(&self) -> Result<Vec<DisciplineData>, ApiError> {
        self.gym.send(&ListDisciplines)
    }
}

/// `/person/...`.
pub struct People<'a, T> {
    gym: &'a UsaGym<T>,
}

impl<T: Transport> People<'_, T> {
    pub fn exists(
        &self,
        member_id: impl ToString,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Result<bool, ApiError> {
        self.gym.send(&PersonExists {
            member_id: member_id.to_string(),
            last_name: last_name.into(),
            date_of_birth,
        })
    }

    pub fn verify_legal_contact(&self, person_id: impl ToString, email: impl Into<String>) -> Result<bool, ApiError> {
        self.gym.send(&VerifyLegalContactEmail {
            subject: VerificationSubject::Person,
            id: person_id.to_string(),
            email: email.into(),
        })
    }
}

/// `/group/...`.
pub struct Groups<'a, T> {
    gym: &'a UsaGym<T>,
}

impl<T: Transport> Groups<'_, T> {
    pub fn verify_legal_contact(&self, group_id: impl ToString, email: impl Into<String>) -> Result<bool, ApiError> {
        self.gym.send(&VerifyLegalContactEmail {
            subject: VerificationSubject::Group,
            id: group_id.to_string(),
            email: email.into(),
        })
    }
}

/// Routes scoped to one sanction.
pub struct Sanction<'a, T> {
    gym: &'a UsaGym<T>,
    sanction_id: u64,
}

impl<'a, T: Transport> Sanction<'a, T> {
    pub fn id(&self) -> u64 {
        self.sanction_id
    }

    pub fn reservations(&self) -> Reservations<'a, T> {
        Reservations {
            gym: self.gym,
            sanction_id: self.sanction_id,
        }
    }

    /// Verify a batch of members of one type against this sanction.
    pub fn verification<I, S>(&self, member_type: MemberType, member_ids: I) -> Result<Vec<VerificationResult>, ApiError>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.gym.send(&VerifyMembers {
            sanction_id: self.sanction_id,
            member_type,
            member_ids: member_ids.into_iter().map(|id| id.to_string()).collect(),
        })
    }

    /// Whether `email` belongs to a coach able to supervise the person or
    /// group `id` at this sanction.
    pub fn verify_coach_email(
        &self,
        subject: VerificationSubject,
        id: impl ToString,
        email: impl Into<String>,
    ) -> Result<bool, ApiError> {
        self.gym.send(&VerifyCoachEmail {
            sanction_id: self.sanction_id,
            subject,
            id: id.to_string(),
            email: email.into(),
        })
    }
}

/// `/sanction/{id}/reservations/...`.
pub struct Reservations<'a, T> {
    gym: &'a UsaGym<T>,
    sanction_id: u64,
}

impl<T: Transport> Reservations<'_, T> {
    /// Any reservation listing, chosen by record type.
    pub fn list<R: ReservationRecord>(&self, filter: ReservationFilter) -> Result<Vec<R>, ApiError> {
        self.gym
            .send(&SanctionReservations::<R>::new(self.sanction_id, filter))
    }

    pub fn athletes(&self, filter: ReservationFilter) -> Result<Vec<AthleteReservation>, ApiError> {
        self.list(filter)
    }

    pub fn clubs(&self, filter: ReservationFilter) -> Result<Vec<ClubReservation>, ApiError> {
        self.list(filter)
    }

    pub fn coaches(&self, filter: ReservationFilter) -> Result<Vec<CoachReservation>, ApiError> {
        self.list(filter)
    }

    pub fn judges(&self, filter: ReservationFilter) -> Result<Vec<JudgeReservation>, ApiError> {
        self.list(filter)
    }

    pub fn individuals(&self, filter: ReservationFilter) -> Result<Vec<IndividualReservation>, ApiError> {
        self.list(filter)
    }

    pub fn groups(&self, filter: ReservationFilter) -> Result<Vec<GroupReservation>, ApiError> {
        self.list(filter)
    }
}
