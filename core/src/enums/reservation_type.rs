use super::WireEnum;

/// What a sanction reservation registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationType {
    Athlete,
    Club,
    Coach,
    Judge,
    Individual,
    Group,
}

impl WireEnum for ReservationType {
    const FAMILY: &'static str = "ReservationType";

    const ALL: &'static [Self] = &[
        ReservationType::Athlete,
        ReservationType::Club,
        ReservationType::Coach,
        ReservationType::Judge,
        ReservationType::Individual,
        ReservationType::Group,
    ];

    fn code(self) -> &'static str {
        match self {
            ReservationType::Athlete => "athlete",
            ReservationType::Club => "club",
            ReservationType::Coach => "coach",
            ReservationType::Judge => "judge",
            ReservationType::Individual => "individual",
            ReservationType::Group => "group",
        }
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("athletes", ReservationType::Athlete),
            ("clubs", ReservationType::Club),
            ("coaches", ReservationType::Coach),
            ("judges", ReservationType::Judge),
            ("individuals", ReservationType::Individual),
            ("groups", ReservationType::Group),
        ]
    }
}

wire_enum_traits!(ReservationType);

impl ReservationType {
    pub fn label(self) -> &'static str {
        match self {
            ReservationType::Athlete => "Athlete",
            ReservationType::Club => "Club",
            ReservationType::Coach => "Coach",
            ReservationType::Judge => "Judge",
            ReservationType::Individual => "Individual",
            ReservationType::Group => "Group",
        }
    }

    /// Last segment of `/sanction/{id}/reservations/{type}`.
    pub fn path_segment(self) -> &'static str {
        self.code()
    }
}
