use super::WireEnum;

/// Kind of membership. `Professional`, `Instructor` and `Official` are
/// retired codes that still appear on older records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberType {
    Athlete,
    Coach,
    Judge,
    Club,
    Administrator,
    Professional,
    Instructor,
    Official,
}

impl WireEnum for MemberType {
    const FAMILY: &'static str = "MemberType";

    const ALL: &'static [Self] = &[
        MemberType::Athlete,
        MemberType::Coach,
        MemberType::Judge,
        MemberType::Club,
        MemberType::Administrator,
        MemberType::Professional,
        MemberType::Instructor,
        MemberType::Official,
    ];

    fn code(self) -> &'static str {
        match self {
            MemberType::Athlete => "athlete",
            MemberType::Coach => "coach",
            MemberType::Judge => "judge",
            MemberType::Club => "club",
            MemberType::Administrator => "administrator",
            MemberType::Professional => "professional",
            MemberType::Instructor => "instructor",
            MemberType::Official => "official",
        }
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("athletes", MemberType::Athlete),
            ("coaches", MemberType::Coach),
            ("judges", MemberType::Judge),
            ("admin", MemberType::Administrator),
            ("pro", MemberType::Professional),
        ]
    }
}

wire_enum_traits!(MemberType);

impl MemberType {
    pub fn label(self) -> &'static str {
        match self {
            MemberType::Athlete => "Athlete",
            MemberType::Coach => "Coach",
            MemberType::Judge => "Judge",
            MemberType::Club => "Club",
            MemberType::Administrator => "Administrator",
            MemberType::Professional => "Professional",
            MemberType::Instructor => "Instructor",
            MemberType::Official => "Official",
        }
    }

    pub fn is_athlete(self) -> bool {
        matches!(self, MemberType::Athlete)
    }

    pub fn is_coach(self) -> bool {
        matches!(
            self,
            MemberType::Coach | MemberType::Professional | MemberType::Instructor
        )
    }

    pub fn is_judge(self) -> bool {
        matches!(self, MemberType::Judge | MemberType::Official)
    }

    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            MemberType::Professional | MemberType::Instructor | MemberType::Official
        )
    }

    /// Segment used in verification URLs; retired codes map to their
    /// current equivalent.
    pub fn path_segment(self) -> &'static str {
        match self {
            MemberType::Professional | MemberType::Instructor => MemberType::Coach.code(),
            MemberType::Official => MemberType::Judge.code(),
            other => other.code(),
        }
    }
}
