//! Check build/parse behaviour against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file lists inputs with the expected request, record or error.
//! Records are compared through their serialized form, field by field, so a
//! vector only pins down the fields it names.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use usagym_core::{
    ApiError, AthleteReservation, ClientConfig, ClubReservation, CoachReservation, DisciplineData,
    FromFields, GroupReservation, HttpMethod, HttpRequest, HttpResponse, IndividualReservation,
    JudgeReservation, ListDisciplines, MemberType, ParseError, PersonExists, ReservationFilter,
    ReservationRecord, SanctionReservations, TestCredentials, UsaGymClient, VerificationResult,
    VerificationSubject, VerifyCoachEmail, VerifyLegalContactEmail, VerifyMembers, WireEnum,
};

fn load(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn str_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().map(|v| v.as_str().unwrap().to_string()).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

fn serialized<R: FromFields + Serialize>(input: &Value) -> Result<Value, ParseError> {
    R::from_value(input).map(|record| serde_json::to_value(record).unwrap())
}

fn parse_record(record: &str, input: &Value) -> Result<Value, ParseError> {
    match record {
        "athlete" => serialized::<AthleteReservation>(input),
        "club" => serialized::<ClubReservation>(input),
        "coach" => serialized::<CoachReservation>(input),
        "judge" => serialized::<JudgeReservation>(input),
        "group" => serialized::<GroupReservation>(input),
        "individual" => serialized::<IndividualReservation>(input),
        "discipline" => serialized::<DisciplineData>(input),
        "verification" => serialized::<VerificationResult>(input),
        other => panic!("unknown record kind: {other}"),
    }
}

#[test]
fn record_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/records.json"));

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = parse_record(case["record"].as_str().unwrap(), &case["input"]);

        if let Some(message) = case.get("error") {
            let err = result.expect_err(name);
            assert_eq!(err.to_string(), message.as_str().unwrap(), "{name}: error");
            continue;
        }

        let parsed = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        for (field, expected) in case["expected"].as_object().unwrap() {
            assert_eq!(&parsed[field], expected, "{name}: field `{field}`");
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

fn kind(err: &ApiError) -> &'static str {
    match err {
        ApiError::Authentication { .. } => "authentication",
        ApiError::NotFound { .. } => "not_found",
        ApiError::Validation { .. } => "validation",
        ApiError::RateLimited { .. } => "rate_limited",
        ApiError::Api { .. } => "api",
        ApiError::Parse(_) => "parse",
        ApiError::Deserialization(_) => "deserialization",
        ApiError::Transport(_) => "transport",
        ApiError::Config(_) => "config",
    }
}

#[test]
fn error_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/errors.json"));

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let raw = &case["response"];
        let response = HttpResponse {
            status: raw["status"].as_u64().unwrap() as u16,
            headers: raw["headers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|h| (h[0].as_str().unwrap().to_string(), h[1].as_str().unwrap().to_string()))
                .collect(),
            body: raw["body"].as_str().unwrap().to_string(),
        };
        let expected = &case["expected"];

        let err = ApiError::from_response(&response);
        assert_eq!(kind(&err), expected["kind"].as_str().unwrap(), "{name}: kind");
        assert_eq!(
            err.status().map(u64::from),
            expected["status"].as_u64(),
            "{name}: status"
        );
        assert_eq!(err.message(), expected["message"].as_str(), "{name}: message");

        if let Some(fields) = expected.get("field_errors").and_then(Value::as_object) {
            for (field, messages) in fields {
                assert_eq!(err.field_errors(field), str_list(messages), "{name}: errors for `{field}`");
            }
        }
        if let Some(secs) = expected.get("retry_after_secs") {
            assert_eq!(err.retry_after().map(|d| d.as_secs()), secs.as_u64(), "{name}: retry after");
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn reservations<R: ReservationRecord>(
    client: &UsaGymClient,
    sanction_id: u64,
    filter: ReservationFilter,
) -> HttpRequest {
    client
        .build(&SanctionReservations::<R>::new(sanction_id, filter))
        .unwrap()
}

fn subject(raw: &Value) -> VerificationSubject {
    match raw.as_str().unwrap() {
        "person" => VerificationSubject::Person,
        "group" => VerificationSubject::Group,
        other => panic!("unknown subject: {other}"),
    }
}

fn build(client: &UsaGymClient, endpoint: &Value) -> HttpRequest {
    let text = |key: &str| endpoint[key].as_str().unwrap().to_string();
    let sanction_id = || endpoint["sanction_id"].as_u64().unwrap();

    match endpoint["kind"].as_str().unwrap() {
        "test" => client.build(&TestCredentials).unwrap(),
        "disciplines" => client.build(&ListDisciplines).unwrap(),
        "person_exists" => client
            .build(&PersonExists {
                member_id: text("member_id"),
                last_name: text("last_name"),
                date_of_birth: NaiveDate::parse_from_str(&text("dob"), "%Y-%m-%d").unwrap(),
            })
            .unwrap(),
        "reservations" => {
            let filter = ReservationFilter::new()
                .clubs(str_list(&endpoint["clubs"]))
                .levels(str_list(&endpoint["levels"]));
            match endpoint["reservation_type"].as_str().unwrap() {
                "athlete" => reservations::<AthleteReservation>(client, sanction_id(), filter),
                "club" => reservations::<ClubReservation>(client, sanction_id(), filter),
                "coach" => reservations::<CoachReservation>(client, sanction_id(), filter),
                "judge" => reservations::<JudgeReservation>(client, sanction_id(), filter),
                "individual" => reservations::<IndividualReservation>(client, sanction_id(), filter),
                "group" => reservations::<GroupReservation>(client, sanction_id(), filter),
                other => panic!("unknown reservation type: {other}"),
            }
        }
        "verification" => client
            .build(&VerifyMembers {
                sanction_id: sanction_id(),
                member_type: MemberType::parse(&text("member_type")).unwrap(),
                member_ids: str_list(&endpoint["people"]),
            })
            .unwrap(),
        "coach_email" => client
            .build(&VerifyCoachEmail {
                sanction_id: sanction_id(),
                subject: subject(&endpoint["subject"]),
                id: text("id"),
                email: text("email"),
            })
            .unwrap(),
        "legal_contact" => client
            .build(&VerifyLegalContactEmail {
                subject: subject(&endpoint["subject"]),
                id: text("id"),
                email: text("email"),
            })
            .unwrap(),
        other => panic!("unknown endpoint kind: {other}"),
    }
}

#[test]
fn request_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/requests.json"));
    let base_url = vectors["base_url"].as_str().unwrap();
    let config = ClientConfig::new(
        vectors["username"].as_str().unwrap(),
        vectors["password"].as_str().unwrap(),
    )
    .with_base_url(base_url);
    let auth = config.auth_header();
    let client = UsaGymClient::new(config).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];

        let req = build(&client, &case["endpoint"]);
        assert_eq!(expected["method"].as_str().unwrap(), req.method.as_str(), "{name}: method");
        assert_eq!(req.method, HttpMethod::Get, "{name}: method");
        assert_eq!(
            req.url,
            format!("{base_url}{}", expected["url"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(req.header("authorization"), Some(auth.as_str()), "{name}: auth");
    }
}
