use super::WireEnum;

/// Competitive gender as recorded on a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl WireEnum for Gender {
    const FAMILY: &'static str = "Gender";

    const ALL: &'static [Self] = &[Gender::Male, Gender::Female];

    fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("male", Gender::Male),
            ("man", Gender::Male),
            ("men", Gender::Male),
            ("boy", Gender::Male),
            ("female", Gender::Female),
            ("woman", Gender::Female),
            ("women", Gender::Female),
            ("girl", Gender::Female),
        ]
    }
}

wire_enum_traits!(Gender);

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerant_parse() {
        assert_eq!(Gender::parse_lenient("f"), Some(Gender::Female));
        assert_eq!(Gender::parse_lenient("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse_lenient("X"), None);
        assert_eq!(Gender::Female.label(), "Female");
    }
}
