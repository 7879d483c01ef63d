use super::WireEnum;

/// Competitive program a member, level or sanction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Discipline {
    WomensArtistic,
    MensArtistic,
    TrampolineTumbling,
    Rhythmic,
    Acrobatic,
    GymnasticsForAll,
}

impl WireEnum for Discipline {
    const FAMILY: &'static str = "Discipline";

    const ALL: &'static [Self] = &[
        Discipline::WomensArtistic,
        Discipline::MensArtistic,
        Discipline::TrampolineTumbling,
        Discipline::Rhythmic,
        Discipline::Acrobatic,
        Discipline::GymnasticsForAll,
    ];

    fn code(self) -> &'static str {
        match self {
            Discipline::WomensArtistic => "W",
            Discipline::MensArtistic => "M",
            Discipline::TrampolineTumbling => "TT",
            Discipline::Rhythmic => "R",
            Discipline::Acrobatic => "AC",
            Discipline::GymnasticsForAll => "GFA",
        }
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("women", Discipline::WomensArtistic),
            ("womens", Discipline::WomensArtistic),
            ("women's", Discipline::WomensArtistic),
            ("women's artistic", Discipline::WomensArtistic),
            ("womens artistic", Discipline::WomensArtistic),
            ("wag", Discipline::WomensArtistic),
            ("wa", Discipline::WomensArtistic),
            ("men", Discipline::MensArtistic),
            ("mens", Discipline::MensArtistic),
            ("men's", Discipline::MensArtistic),
            ("men's artistic", Discipline::MensArtistic),
            ("mens artistic", Discipline::MensArtistic),
            ("mag", Discipline::MensArtistic),
            ("ma", Discipline::MensArtistic),
            ("t&t", Discipline::TrampolineTumbling),
            ("t and t", Discipline::TrampolineTumbling),
            ("trampoline", Discipline::TrampolineTumbling),
            ("tumbling", Discipline::TrampolineTumbling),
            ("trampoline & tumbling", Discipline::TrampolineTumbling),
            ("trampoline and tumbling", Discipline::TrampolineTumbling),
            ("rhythmic", Discipline::Rhythmic),
            ("rg", Discipline::Rhythmic),
            ("rhythmic gymnastics", Discipline::Rhythmic),
            ("acro", Discipline::Acrobatic),
            ("acrobatic", Discipline::Acrobatic),
            ("acrobatic gymnastics", Discipline::Acrobatic),
            ("gymnastics for all", Discipline::GymnasticsForAll),
            ("gg", Discipline::GymnasticsForAll),
            ("group", Discipline::GymnasticsForAll),
        ]
    }
}

wire_enum_traits!(Discipline);

impl Discipline {
    pub fn short_name(self) -> &'static str {
        match self {
            Discipline::WomensArtistic => "WAG",
            Discipline::MensArtistic => "MAG",
            Discipline::TrampolineTumbling => "T&T",
            Discipline::Rhythmic => "RG",
            Discipline::Acrobatic => "ACRO",
            Discipline::GymnasticsForAll => "GFA",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Discipline::WomensArtistic => "Women's Artistic",
            Discipline::MensArtistic => "Men's Artistic",
            Discipline::TrampolineTumbling => "Trampoline & Tumbling",
            Discipline::Rhythmic => "Rhythmic",
            Discipline::Acrobatic => "Acrobatic",
            Discipline::GymnasticsForAll => "Gymnastics for All",
        }
    }

    pub fn is_artistic(self) -> bool {
        matches!(self, Discipline::WomensArtistic | Discipline::MensArtistic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn womens_synonyms_ignore_case() {
        for raw in ["women", "WAG", "Women's Artistic", "wOmEn", "Women\u{2019}s Artistic", " wag "] {
            assert_eq!(Discipline::parse(raw).unwrap(), Discipline::WomensArtistic, "{raw}");
        }
    }

    #[test]
    fn other_synonyms() {
        assert_eq!(Discipline::parse("MAG").unwrap(), Discipline::MensArtistic);
        assert_eq!(Discipline::parse("t&t").unwrap(), Discipline::TrampolineTumbling);
        assert_eq!(Discipline::parse("Rhythmic Gymnastics").unwrap(), Discipline::Rhythmic);
        assert_eq!(Discipline::parse("acro").unwrap(), Discipline::Acrobatic);
        assert_eq!(Discipline::parse("gfa").unwrap(), Discipline::GymnasticsForAll);
        assert_eq!(Discipline::parse("tt").unwrap(), Discipline::TrampolineTumbling);
    }

    #[test]
    fn labels() {
        assert_eq!(Discipline::WomensArtistic.short_name(), "WAG");
        assert_eq!(Discipline::TrampolineTumbling.long_name(), "Trampoline & Tumbling");
        assert!(Discipline::MensArtistic.is_artistic());
        assert!(!Discipline::Rhythmic.is_artistic());
    }

    #[test]
    fn lenient_parse_returns_none_for_unknown() {
        assert!(Discipline::parse_lenient("XYZ").is_none());
    }
}
