//! Canned data served by the mock API, written in the API's own field
//! names and with its quirks (numeric and string ids mixed, blank strings
//! for missing text, legacy contact keys, `1`/`"Y"` flags).

use std::collections::HashMap;

use serde_json::{json, Value};

/// Sanction with a full set of reservations.
pub const SANCTION_ID: u64 = 58012;

/// Sanction that always answers 429.
pub const THROTTLED_SANCTION_ID: u64 = 42900;

/// Seconds advertised in `Retry-After` for the throttled sanction.
pub const RETRY_AFTER_SECS: u64 = 120;

pub struct Person {
    pub member_id: String,
    pub last_name: String,
    pub dob: String,
    pub legal_contact_email: String,
}

pub struct Sanction {
    pub athletes: Vec<Value>,
    pub clubs: Vec<Value>,
    pub coaches: Vec<Value>,
    pub judges: Vec<Value>,
    pub groups: Vec<Value>,
}

pub struct Fixtures {
    pub disciplines: Vec<Value>,
    pub sanctions: HashMap<u64, Sanction>,
    pub members: Vec<Value>,
    pub people: Vec<Person>,
    /// Group id → legal contact email.
    pub groups: HashMap<String, String>,
}

impl Fixtures {
    pub fn sample() -> Self {
        let mut sanctions = HashMap::new();
        sanctions.insert(SANCTION_ID, sample_sanction());

        let mut groups = HashMap::new();
        groups.insert("4001".to_string(), "blue.pair@example.com".to_string());

        Self {
            disciplines: vec![
                json!({"Code": "W", "Name": "Women's Artistic", "Levels": ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]}),
                json!({"Code": "M", "Name": "Men's Artistic", "Levels": "4,5,6,7,8,9,10"}),
                json!({"Code": "TT", "Description": "Trampoline & Tumbling"}),
                json!({"Code": "R", "Name": "Rhythmic", "Active": 1}),
                json!({"Code": "AC", "Name": "Acrobatic"}),
                json!({"Code": "GFA", "Name": "Gymnastics for All", "Active": false}),
            ],
            sanctions,
            members: vec![
                json!({
                    "MemberID": 1001, "FirstName": "Simone", "LastName": "Rivera",
                    "DOB": "03/04/2009", "MemberType": "athlete", "Status": "Active",
                    "Discipline": ["W"], "ExpirationDate": "07/31/2027",
                    "ClubIDs": [9001, 9003], "ClubAbbrevs": ["AGA", ""],
                    "ClubNames": ["Apex Gymnastics Academy", "Summit Tumbling"],
                    "ClubStatuses": ["Active", "Expired"], "ClubInternational": [false, false],
                }),
                json!({
                    "MemberID": "1003", "FirstName": "Maya", "LastName": "Patel",
                    "MemberType": "athlete", "Status": "Suspended", "Discipline": "W",
                    "Eligible": false, "ClubIDs": [9002],
                }),
                json!({
                    "MemberID": 2001, "FirstName": "Lee", "LastName": "Park",
                    "MemberType": "coach", "Status": "Active", "Discipline": ["W", "TT"],
                    "ClubIDs": [9001], "ClubNames": ["Apex Gymnastics Academy"],
                }),
                json!({
                    "MemberID": 3001, "FirstName": "Ruth", "LastName": "Adams",
                    "MemberType": "judge", "Status": "Active", "Discipline": ["W"],
                }),
            ],
            people: vec![Person {
                member_id: "1001".to_string(),
                last_name: "Rivera".to_string(),
                dob: "03/04/2009".to_string(),
                legal_contact_email: "parent.rivera@example.com".to_string(),
            }],
            groups,
        }
    }

    /// Coach emails on file for a sanction.
    pub fn coach_emails(&self, sanction_id: u64) -> Vec<String> {
        self.sanctions
            .get(&sanction_id)
            .map(|s| {
                s.coaches
                    .iter()
                    .filter_map(|c| c.get("Email").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn sample_sanction() -> Sanction {
    Sanction {
        athletes: vec![
            json!({
                "MemberID": 1001, "FirstName": "Simone", "LastName": "Rivera",
                "DOB": "03/04/2009", "Gender": "F", "ClubID": 9001, "ClubAbbrev": "AGA",
                "ClubName": "Apex Gymnastics Academy", "Level": "10", "Discipline": "W",
                "Status": "Active", "Scratched": false, "USCitizen": "Y",
                "Apparatus": ["VT", "UB", "BB", "FX"],
            }),
            json!({
                "MemberID": "1002", "FirstName": "Jordan", "LastName": "Chen",
                "DOB": "11/22/2010", "Gender": "female", "ClubID": "9001", "ClubAbbrev": "AGA",
                "ClubName": "Apex Gymnastics Academy", "Level": "9", "Discipline": "Women's Artistic",
                "Status": "Pending", "Scratched": 0,
            }),
            json!({
                "MemberID": 1003, "FirstName": "Maya", "LastName": "Patel",
                "DOB": "", "Gender": "", "ClubID": 9002, "ClubAbbrev": "",
                "ClubName": "Lakeside Gym Club", "Level": "10", "Discipline": "wag",
                "Status": "Suspended", "Scratched": 1, "ScratchDate": "2024-02-10 14:30:00",
            }),
        ],
        clubs: vec![
            json!({
                "ClubID": 9001, "ClubName": "Apex Gymnastics Academy", "ClubAbbrev": "AGA",
                "ClubCity": "Austin", "ClubState": "TX", "ClubContactName": "Dana Lee",
                "ClubContactEmail": "dana@apex.example", "ClubContactPhone": "512-555-0100",
                "Status": "Active",
            }),
            json!({
                "ClubID": "9002", "ClubName": "Lakeside Gym Club", "ClubAbbrev": "",
                "City": "Madison", "State": "", "ClubContact": "Sam Ortiz",
                "ClubEmail": "sam@lakeside.example", "International": "0",
            }),
        ],
        coaches: vec![
            json!({
                "MemberID": 2001, "FirstName": "Lee", "LastName": "Park",
                "Email": "lee.park@apex.example", "ClubID": 9001, "ClubAbbrev": "AGA",
                "ClubName": "Apex Gymnastics Academy", "Discipline": "W", "Level": "Coach",
                "Status": "Active", "SafeSportExpiration": "06/30/2027",
                "BackgroundCheckExpiration": "01/15/2028",
            }),
            json!({
                "MemberID": 2002, "FirstName": "Ana", "LastName": "Silva",
                "Email": "ana.silva@lakeside.example", "ClubID": 9002, "ClubAbbrev": "",
                "ClubName": "Lakeside Gym Club", "ReservationType": "coach", "Level": "",
                "Status": "Expired", "SafeSportExpiration": "not on file",
            }),
        ],
        judges: vec![json!({
            "MemberID": 3001, "FirstName": "Ruth", "LastName": "Adams",
            "Email": "ruth.adams@example.com", "Discipline": "W", "Status": "Active",
            "Certification": ["FIG", "NGJ"], "JudgeLevel": "National",
        })],
        groups: vec![json!({
            "GroupID": 4001, "GroupName": "Blue Pair", "ClubID": 9001, "ClubAbbrev": "AGA",
            "ClubName": "Apex Gymnastics Academy", "Discipline": "AC", "Level": "11-16",
            "Athletes": [
                {"MemberID": 1005, "FirstName": "Bo", "LastName": "Yu", "DOB": "05/06/2011", "Gender": "M", "Status": "Active"},
                {"MemberID": 1006, "FirstName": "Al", "LastName": "Ng", "DOB": "08/09/2012", "Gender": "M", "Status": "Active"},
            ],
        })],
    }
}
