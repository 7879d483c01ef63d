//! In-process stand-in for the USA Gymnastics API.
//!
//! Serves every route the client uses from `Fixtures`, behind HTTP Basic
//! auth, and reproduces the API's error shapes: 401 for bad credentials,
//! 404 for unknown sanctions, 422 with `errors` or `data.errors`, and 429
//! with `Retry-After` for `THROTTLED_SANCTION_ID`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::{debug, warn};

pub mod fixtures;

pub use fixtures::{Fixtures, RETRY_AFTER_SECS, SANCTION_ID, THROTTLED_SANCTION_ID};

pub const USERNAME: &str = "demo";
pub const PASSWORD: &str = "secret";

/// Prefix every route is mounted under.
pub const BASE_PATH: &str = "/v4";

#[derive(Clone)]
struct AppState {
    fixtures: Arc<Fixtures>,
    authorization: Arc<str>,
}

/// Sample fixtures with the default credentials.
pub fn app() -> Router {
    app_with(Fixtures::sample(), USERNAME, PASSWORD)
}

pub fn app_with(fixtures: Fixtures, username: &str, password: &str) -> Router {
    let authorization = format!("Basic {}", STANDARD.encode(format!("{username}:{password}")));
    let state = AppState {
        fixtures: Arc::new(fixtures),
        authorization: authorization.into(),
    };

    let api = Router::new()
        .route("/test", get(test_credentials))
        .route("/discipline", get(list_disciplines))
        .route("/person/exists", get(person_exists))
        .route("/sanction/{sanction_id}/reservations/{kind}", get(list_reservations))
        .route("/sanction/{sanction_id}/verification/{member_type}", get(verify_members))
        .route(
            "/{sanction_id}/{subject}/{id}/verification/coach/email/{email}",
            get(verify_coach_email),
        )
        .route(
            "/person/{id}/verification/legalContact/email/{email}",
            get(verify_person_legal_contact),
        )
        .route(
            "/group/{id}/verification/legalContact/email/{email}",
            get(verify_group_legal_contact),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_basic_auth))
        .with_state(state);

    Router::new().nest(BASE_PATH, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_basic_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == &*state.authorization);
    if !authorized {
        warn!(uri = %request.uri(), "rejecting request with bad credentials");
        return error(StatusCode::UNAUTHORIZED, "Unauthenticated.");
    }
    debug!(uri = %request.uri(), "serving request");
    next.run(request).await
}

fn data(payload: Value) -> Response {
    Json(json!({ "data": payload })).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn invalid(errors: Map<String, Value>, nested: bool) -> Response {
    let body = if nested {
        json!({ "message": "The given data was invalid.", "data": { "errors": errors } })
    } else {
        json!({ "message": "The given data was invalid.", "errors": errors })
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

fn throttled() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [(header::RETRY_AFTER, RETRY_AFTER_SECS.to_string())],
        Json(json!({ "message": "Too Many Attempts." })),
    )
        .into_response()
}

fn invalid_email(email: &str) -> Option<Response> {
    if email.contains('@') {
        return None;
    }
    let mut errors = Map::new();
    errors.insert(
        "email".to_string(),
        json!(["The email must be a valid email address."]),
    );
    Some(invalid(errors, false))
}

fn split(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn text(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn matches_filter(item: &Value, key: &str, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    text(item, key).is_some_and(|actual| wanted.iter().any(|w| *w == actual))
}

async fn test_credentials() -> Response {
    data(json!({ "message": "Credentials are valid." }))
}

async fn list_disciplines(State(state): State<AppState>) -> Response {
    data(json!({ "disciplines": state.fixtures.disciplines }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExistsQuery {
    member_id: Option<String>,
    last_name: Option<String>,
    dob: Option<String>,
}

async fn person_exists(State(state): State<AppState>, Query(query): Query<ExistsQuery>) -> Response {
    let mut errors = Map::new();
    let mut required = |value: Option<String>, field: &str, label: &str| {
        let value = value.filter(|v| !v.trim().is_empty());
        if value.is_none() {
            errors.insert(field.to_string(), json!([format!("The {label} field is required.")]));
        }
        value.unwrap_or_default()
    };
    let member_id = required(query.member_id, "memberId", "member id");
    let last_name = required(query.last_name, "lastName", "last name");
    let dob = required(query.dob, "dob", "dob");
    if !errors.is_empty() {
        return invalid(errors, false);
    }

    let valid = state.fixtures.people.iter().any(|p| {
        p.member_id == member_id && p.last_name.eq_ignore_ascii_case(&last_name) && p.dob == dob
    });
    data(json!({ "valid": valid }))
}

#[derive(Deserialize)]
struct ReservationQuery {
    clubs: Option<String>,
    levels: Option<String>,
}

async fn list_reservations(
    State(state): State<AppState>,
    Path((sanction_id, kind)): Path<(u64, String)>,
    Query(query): Query<ReservationQuery>,
) -> Response {
    if sanction_id == THROTTLED_SANCTION_ID {
        return throttled();
    }
    let Some(sanction) = state.fixtures.sanctions.get(&sanction_id) else {
        return error(StatusCode::NOT_FOUND, "Sanction not found.");
    };

    let items: Vec<&Value> = match kind.as_str() {
        "athlete" => sanction.athletes.iter().collect(),
        "club" => sanction.clubs.iter().collect(),
        "coach" => sanction.coaches.iter().collect(),
        "judge" => sanction.judges.iter().collect(),
        "group" => sanction.groups.iter().collect(),
        "individual" => sanction.athletes.iter().chain(&sanction.coaches).collect(),
        _ => return error(StatusCode::NOT_FOUND, "Unknown reservation type."),
    };

    let clubs = split(query.clubs.as_deref());
    let levels = split(query.levels.as_deref());
    let reservations: Vec<Value> = items
        .into_iter()
        .filter(|item| matches_filter(item, "ClubID", &clubs) && matches_filter(item, "Level", &levels))
        .cloned()
        .collect();

    data(json!({ "reservations": reservations }))
}

#[derive(Deserialize)]
struct PeopleQuery {
    people: Option<String>,
}

async fn verify_members(
    State(state): State<AppState>,
    Path((sanction_id, member_type)): Path<(u64, String)>,
    Query(query): Query<PeopleQuery>,
) -> Response {
    if sanction_id == THROTTLED_SANCTION_ID {
        return throttled();
    }
    if !state.fixtures.sanctions.contains_key(&sanction_id) {
        return error(StatusCode::NOT_FOUND, "Sanction not found.");
    }
    if !matches!(member_type.as_str(), "athlete" | "coach" | "judge" | "club" | "administrator") {
        return error(StatusCode::NOT_FOUND, "Unknown member type.");
    }

    let people = split(query.people.as_deref());
    if people.is_empty() {
        let mut errors = Map::new();
        errors.insert("people".to_string(), json!(["The people field is required."]));
        return invalid(errors, true);
    }

    let members: Vec<Value> = state
        .fixtures
        .members
        .iter()
        .filter(|m| text(m, "MemberType").as_deref() == Some(member_type.as_str()))
        .filter(|m| matches_filter(m, "MemberID", &people))
        .cloned()
        .collect();

    data(json!({ "members": members }))
}

async fn verify_coach_email(
    State(state): State<AppState>,
    Path((sanction_id, subject, id, email)): Path<(u64, String, String, String)>,
) -> Response {
    if subject != "person" && subject != "group" {
        return error(StatusCode::NOT_FOUND, "Unknown verification subject.");
    }
    if !state.fixtures.sanctions.contains_key(&sanction_id) {
        return error(StatusCode::NOT_FOUND, "Sanction not found.");
    }
    if let Some(rejection) = invalid_email(&email) {
        return rejection;
    }

    debug!(%subject, %id, "checking coach email");
    let valid = state
        .fixtures
        .coach_emails(sanction_id)
        .iter()
        .any(|known| known.eq_ignore_ascii_case(&email));
    data(json!({ "valid": valid }))
}

async fn verify_person_legal_contact(
    State(state): State<AppState>,
    Path((id, email)): Path<(String, String)>,
) -> Response {
    if let Some(rejection) = invalid_email(&email) {
        return rejection;
    }
    let Some(person) = state.fixtures.people.iter().find(|p| p.member_id == id) else {
        return error(StatusCode::NOT_FOUND, "Person not found.");
    };
    data(json!({ "valid": person.legal_contact_email.eq_ignore_ascii_case(&email) }))
}

async fn verify_group_legal_contact(
    State(state): State<AppState>,
    Path((id, email)): Path<(String, String)>,
) -> Response {
    if let Some(rejection) = invalid_email(&email) {
        return rejection;
    }
    let Some(contact) = state.fixtures.groups.get(&id) else {
        return error(StatusCode::NOT_FOUND, "Group not found.");
    };
    data(json!({ "valid": contact.eq_ignore_ascii_case(&email) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blanks() {
        assert_eq!(split(Some("1, 2,,3 ")), ["1", "2", "3"]);
        assert!(split(None).is_empty());
    }

    #[test]
    fn filter_compares_numbers_and_strings() {
        let item = json!({"ClubID": 9001, "Level": "10"});
        assert!(matches_filter(&item, "ClubID", &["9001".to_string()]));
        assert!(matches_filter(&item, "Level", &[]));
        assert!(!matches_filter(&item, "Level", &["9".to_string()]));
        assert!(!matches_filter(&item, "Missing", &["9".to_string()]));
    }

    #[test]
    fn sample_fixtures_have_coach_emails() {
        let fixtures = Fixtures::sample();
        assert_eq!(fixtures.coach_emails(SANCTION_ID).len(), 2);
        assert!(fixtures.coach_emails(1).is_empty());
    }
}
