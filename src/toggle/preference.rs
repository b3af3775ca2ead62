//! Theme preference and concrete color mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The user's chosen theme.
///
/// `System` is never persisted: it is represented by the absence of a
/// stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parses a value read back from a preference store.
    ///
    /// Unlike [`FromStr`], which accepts user input leniently, this matches
    /// the exact lowercase names only.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }

    /// Returns the concrete mode, or `None` for `System`.
    pub fn color_mode(self) -> Option<ColorMode> {
        match self {
            ThemePreference::Light => Some(ColorMode::Light),
            ThemePreference::Dark => Some(ColorMode::Dark),
            ThemePreference::System => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(Error::UnknownPreference(s.to_string())),
        }
    }
}

impl From<ColorMode> for ThemePreference {
    fn from(mode: ColorMode) -> Self {
        mode.as_preference()
    }
}

/// A concrete color mode: what the presentation root actually shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    pub fn as_preference(self) -> ThemePreference {
        match self {
            ColorMode::Light => ThemePreference::Light,
            ColorMode::Dark => ThemePreference::Dark,
        }
    }

    /// The value written to the preference store.
    pub fn as_str(self) -> &'static str {
        self.as_preference().as_str()
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
