//! Color mode enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the wire form, `"light"` or `"dark"`, used both as the
    /// persisted value and as the document root attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn inverted(&self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is neither `"light"` nor
/// `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorMode(pub String);

impl fmt::Display for UnknownColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownColorMode {}

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}
