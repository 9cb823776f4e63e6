use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The dialect of Homescript to parse. Both share an engine and a token set,
/// but differ in comment syntax, keywords and grammar.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    /// Homescript v1: `#` line comments, semicolon separated statements.
    Legacy,

    /// Homescript v3: `//` and `/* */` comments, items, types and
    /// annotations.
    #[default]
    Current,
}

impl Version {
    pub fn name(&self) -> &'static str {
        match self {
            Version::Legacy => "legacy",
            Version::Current => "current",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Version {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" | "v1" => Ok(Self::Legacy),
            "current" | "v3" => Ok(Self::Current),

            _ => Err("expected one of `current` or `legacy`"),
        }
    }
}
