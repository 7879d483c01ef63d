use serde::Serialize;

use super::{Fields, FromFields};
use crate::enums::Discipline;
use crate::error::ParseError;

/// One entry of the discipline catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplineData {
    pub discipline: Discipline,
    pub name: String,
    pub levels: Vec<String>,
    pub active: bool,
}

impl FromFields for DisciplineData {
    const RECORD: &'static str = "DisciplineData";

    fn read(f: Fields<'_>) -> Result<Self, ParseError> {
        let discipline: Discipline = match f.optional_enum("Code")? {
            Some(code) => code,
            None => f.required_enum("Discipline")?,
        };

        Ok(Self {
            discipline,
            name: f
                .optional_str(&["Name", "Description"])
                .unwrap_or_else(|| discipline.long_name().to_string()),
            levels: f.string_list("Levels")?,
            active: f.flag_or("Active", true),
        })
    }
}

impl DisciplineData {
    pub fn code(&self) -> &'static str {
        crate::enums::WireEnum::code(self.discipline)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn code_and_name() {
        let d = DisciplineData::from_value(&json!({
            "Code": "TT",
            "Description": "Trampoline and Tumbling",
            "Levels": ["1", "2", "Elite"],
        }))
        .unwrap();
        assert_eq!(d.discipline, Discipline::TrampolineTumbling);
        assert_eq!(d.code(), "TT");
        assert_eq!(d.name, "Trampoline and Tumbling");
        assert_eq!(d.levels.len(), 3);
        assert!(d.active);
    }

    #[test]
    fn falls_back_to_discipline_key_and_long_name() {
        let d = DisciplineData::from_value(&json!({"Discipline": "R", "Active": false})).unwrap();
        assert_eq!(d.name, "Rhythmic");
        assert!(!d.active);
    }

    #[test]
    fn blank_code_falls_back_to_discipline_key() {
        let d = DisciplineData::from_value(&json!({"Code": "", "Discipline": "W"})).unwrap();
        assert_eq!(d.discipline, Discipline::WomensArtistic);

        let d = DisciplineData::from_value(&json!({"Code": "  ", "Discipline": "M"})).unwrap();
        assert_eq!(d.discipline, Discipline::MensArtistic);
    }

    #[test]
    fn missing_code_names_fallback_field() {
        let err = DisciplineData::from_value(&json!({"Name": "Mystery"})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { field: "Discipline", .. }));
    }
}
