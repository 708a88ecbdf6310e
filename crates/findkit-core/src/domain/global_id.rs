use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ValidationError;

/// Regional marketplace a search executes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlobalId {
    #[default]
    Us,
    Enca,
    Gb,
    Au,
    At,
    Frbe,
    Fr,
    De,
    Motor,
    It,
    Nlbe,
    Nl,
    Es,
    Ch,
    Hk,
    In,
    Ie,
    My,
    Frca,
    Ph,
    Sg,
}

impl GlobalId {
    pub const ALL: [Self; 21] = [
        Self::Us,
        Self::Enca,
        Self::Gb,
        Self::Au,
        Self::At,
        Self::Frbe,
        Self::Fr,
        Self::De,
        Self::Motor,
        Self::It,
        Self::Nlbe,
        Self::Nl,
        Self::Es,
        Self::Ch,
        Self::Hk,
        Self::In,
        Self::Ie,
        Self::My,
        Self::Frca,
        Self::Ph,
        Self::Sg,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "EBAY-US",
            Self::Enca => "EBAY-ENCA",
            Self::Gb => "EBAY-GB",
            Self::Au => "EBAY-AU",
            Self::At => "EBAY-AT",
            Self::Frbe => "EBAY-FRBE",
            Self::Fr => "EBAY-FR",
            Self::De => "EBAY-DE",
            Self::Motor => "EBAY-MOTOR",
            Self::It => "EBAY-IT",
            Self::Nlbe => "EBAY-NLBE",
            Self::Nl => "EBAY-NL",
            Self::Es => "EBAY-ES",
            Self::Ch => "EBAY-CH",
            Self::Hk => "EBAY-HK",
            Self::In => "EBAY-IN",
            Self::Ie => "EBAY-IE",
            Self::My => "EBAY-MY",
            Self::Frca => "EBAY-FRCA",
            Self::Ph => "EBAY-PH",
            Self::Sg => "EBAY-SG",
        }
    }
}

impl Display for GlobalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the full site code (`EBAY-GB`) or its suffix (`gb`).
impl FromStr for GlobalId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let code = trimmed
            .strip_prefix("EBAY-")
            .or_else(|| trimmed.strip_prefix("ebay-"))
            .unwrap_or(trimmed);

        Self::ALL
            .into_iter()
            .find(|id| id.as_str()[5..].eq_ignore_ascii_case(code))
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "global id",
                value: trimmed.to_owned(),
                expected: Self::ALL
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
