//! Generation modes.

use std::fmt;
use std::str::FromStr;

use crate::error::AegurError;

/// Policy selecting a character pool and whether paranoid handling applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Alphanumerics only, for sites that reject symbols.
    Bank,
    AsciiOnly,
    #[default]
    Strong,
    /// ASCII pool, password hidden unless asked for, buffer scrubbed.
    Paranoid,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Bank, Mode::AsciiOnly, Mode::Strong, Mode::Paranoid];

    /// Resolve mode selector flags. Precedence: bank > ascii > paranoid > strong.
    pub fn from_flags(bank: bool, ascii: bool, paranoid: bool) -> Self {
        if bank {
            Mode::Bank
        } else if ascii {
            Mode::AsciiOnly
        } else if paranoid {
            Mode::Paranoid
        } else {
            Mode::Strong
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Bank => "bank",
            Mode::AsciiOnly => "ascii",
            Mode::Strong => "strong",
            Mode::Paranoid => "paranoid",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = AegurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AegurError::InvalidMode {
                name: s.trim().to_string(),
            })
    }
}
