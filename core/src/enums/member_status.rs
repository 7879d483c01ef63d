use super::WireEnum;

/// Standing of a membership with the federation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberStatus {
    Active,
    Pending,
    Expired,
    Banned,
    Suspended,
    Terminated,
}

impl WireEnum for MemberStatus {
    const FAMILY: &'static str = "MemberStatus";

    const ALL: &'static [Self] = &[
        MemberStatus::Active,
        MemberStatus::Pending,
        MemberStatus::Expired,
        MemberStatus::Banned,
        MemberStatus::Suspended,
        MemberStatus::Terminated,
    ];

    fn code(self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Pending => "Pending",
            MemberStatus::Expired => "Expired",
            MemberStatus::Banned => "Banned",
            MemberStatus::Suspended => "Suspended",
            MemberStatus::Terminated => "Terminated",
        }
    }

    fn synonyms() -> &'static [(&'static str, Self)] {
        &[
            ("current", MemberStatus::Active),
            ("valid", MemberStatus::Active),
            ("pending verification", MemberStatus::Pending),
            ("in progress", MemberStatus::Pending),
            ("lapsed", MemberStatus::Expired),
            ("inactive", MemberStatus::Expired),
            ("ineligible", MemberStatus::Banned),
            ("interim suspension", MemberStatus::Suspended),
            ("revoked", MemberStatus::Terminated),
        ]
    }
}

wire_enum_traits!(MemberStatus);

impl MemberStatus {
    pub fn label(self) -> &'static str {
        self.code()
    }

    /// Whether a member in this state may take part in a sanctioned event.
    pub fn can_participate(self) -> bool {
        matches!(self, MemberStatus::Active | MemberStatus::Pending)
    }

    /// Disciplinary states that need attention from the meet director.
    pub fn is_problem(self) -> bool {
        matches!(
            self,
            MemberStatus::Banned | MemberStatus::Suspended | MemberStatus::Terminated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participation_sets() {
        let allowed: Vec<_> = MemberStatus::ALL
            .iter()
            .filter(|s| s.can_participate())
            .collect();
        assert_eq!(allowed, [&MemberStatus::Active, &MemberStatus::Pending]);

        let problems: Vec<_> = MemberStatus::ALL.iter().filter(|s| s.is_problem()).collect();
        assert_eq!(
            problems,
            [
                &MemberStatus::Banned,
                &MemberStatus::Suspended,
                &MemberStatus::Terminated
            ]
        );
        assert!(!MemberStatus::Expired.can_participate());
        assert!(!MemberStatus::Expired.is_problem());
    }

    #[test]
    fn synonyms() {
        assert_eq!(MemberStatus::parse("LAPSED").unwrap(), MemberStatus::Expired);
        assert_eq!(MemberStatus::parse("active").unwrap(), MemberStatus::Active);
    }
}
