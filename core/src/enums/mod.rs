//! Closed sets of domain codes with synonym-tolerant parsing.
//!
//! # Design
//! Each enum implements `WireEnum`, which supplies both parsers from two
//! tables: the canonical codes (`ALL` + `code()`) and a synonym list. The
//! strict parser fails with `ParseError::UnrecognizedEnumValue`; the lenient
//! one returns `None`. Neither ever falls back to a default member.

use crate::error::ParseError;

/// A closed set of codes as the API writes them.
pub trait WireEnum: Sized + Copy + 'static {
    /// Family name used in error messages.
    const FAMILY: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Canonical wire value.
    fn code(self) -> &'static str;

    /// Alternative spellings, matched case-insensitively.
    fn synonyms() -> &'static [(&'static str, Self)] {
        &[]
    }

    /// Exact code first, then case-insensitive code or synonym.
    fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_lenient(raw).ok_or_else(|| ParseError::UnrecognizedEnumValue {
            family: Self::FAMILY,
            value: raw.to_string(),
        })
    }

    /// Same matching as [`WireEnum::parse`], absent instead of failing.
    fn parse_lenient(raw: &str) -> Option<Self> {
        if let Some(exact) = Self::ALL.iter().find(|v| v.code() == raw) {
            return Some(*exact);
        }

        let needle = raw.trim().replace('\u{2019}', "'");
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .find(|v| v.code().eq_ignore_ascii_case(&needle))
            .copied()
            .or_else(|| {
                Self::synonyms()
                    .iter()
                    .find(|(synonym, _)| synonym.eq_ignore_ascii_case(&needle))
                    .map(|(_, value)| *value)
            })
    }
}

/// `Display`, `FromStr` and serde support in terms of `WireEnum`.
macro_rules! wire_enum_traits {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::WireEnum::code(*self))
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::enums::WireEnum>::parse(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::WireEnum::code(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::enums::WireEnum>::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

mod discipline;
mod gender;
mod member_status;
mod member_type;
mod reservation_type;

pub use discipline::Discipline;
pub use gender::Gender;
pub use member_status::MemberStatus;
pub use member_type::MemberType;
pub use reservation_type::ReservationType;
