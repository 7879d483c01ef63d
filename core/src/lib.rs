//! Synchronous client core for the USA Gymnastics API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The `UsaGym` facade pairs
//! that core with a `Transport` (by default a `ureq` agent) and exposes the
//! API as a hierarchy: `disciplines()`, `person()`, `group()`,
//! `sanctions(id).reservations().athletes(..)` and so on.
//!
//! # Design
//! - `UsaGymClient` is stateless; it holds an immutable `ClientConfig`.
//! - Each route is an `Endpoint` type; `build` produces the request and
//!   `parse` consumes the response, so the I/O boundary is explicit.
//! - Payload items become immutable records through `FromFields`, which
//!   tolerates the API's loose typing (blank strings, numeric ids, mixed
//!   boolean encodings, malformed dates).
//! - Enum codes are normalized across synonyms by `WireEnum`; an unknown
//!   code is an error, never a silent default.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod enums;
pub mod error;
pub mod facade;
pub mod http;
pub mod records;
pub mod transport;

pub use client::UsaGymClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use endpoints::{
    Endpoint, ListDisciplines, PersonExists, ReservationFilter, ReservationRecord,
    SanctionReservations, TestCredentials, VerificationSubject, VerifyCoachEmail,
    VerifyLegalContactEmail, VerifyMembers,
};
pub use enums::{Discipline, Gender, MemberStatus, MemberType, ReservationType, WireEnum};
pub use error::{ApiError, ParseError};
pub use facade::UsaGym;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use records::{
    AthleteReservation, ClubMembership, ClubReservation, CoachReservation, DisciplineData,
    FromFields, GroupAthlete, GroupReservation, IndividualReservation, JudgeReservation,
    VerificationResult,
};
pub use transport::{Transport, UreqTransport};
