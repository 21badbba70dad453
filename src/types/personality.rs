//! Tone of the messages shown when the player hydrates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    #[default]
    Fun,
    Nerd,
    Serious,
}

impl Choice for PersonalityType {
    const ALL: &'static [Self] = &[Self::Fun, Self::Nerd, Self::Serious];

    fn label(self) -> &'static str {
        match self {
            Self::Fun => "Fun",
            Self::Nerd => "Nerd",
            Self::Serious => "Serious",
        }
    }

    fn persisted_name(self) -> &'static str {
        match self {
            Self::Fun => "FUN",
            Self::Nerd => "NERD",
            Self::Serious => "SERIOUS",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PersonalityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown personality type: {}", s))
    }
}
