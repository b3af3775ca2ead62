//! Controller configuration.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

use crate::error::Error;

/// Names the controller uses when talking to its host.
///
/// Every field has a default, so a partial config deserializes cleanly:
///
/// ```rust
/// use tailwind_config_utils::ToggleConfig;
///
/// let config: ToggleConfig = serde_json::from_str(r#"{"storage_key": "color-scheme"}"#).unwrap();
/// assert_eq!(config.storage_key, "color-scheme");
/// assert_eq!(config.dark_class, "dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Preference store key holding `light` or `dark`.
    pub storage_key: String,
    /// Class toggled on the presentation root while dark is active.
    ///
    /// Must be a single class name: a DOM token list rejects empty tokens
    /// and tokens containing whitespace.
    #[serde(deserialize_with = "class_name")]
    pub dark_class: String,
    /// Media query a browser host evaluates for the OS preference.
    pub media_query: String,
}

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            media_query: DEFAULT_MEDIA_QUERY.to_string(),
        }
    }
}

impl ToggleConfig {
    /// Checks that every field is usable by a host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty storage key or a
    /// `dark_class` that is empty or contains whitespace.
    pub fn validate(&self) -> Result<(), Error> {
        if self.storage_key.is_empty() {
            return Err(Error::InvalidConfig("storage_key is empty".to_string()));
        }
        check_class_name(&self.dark_class)
    }
}

fn check_class_name(class: &str) -> Result<(), Error> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(Error::InvalidConfig(format!(
            "dark_class '{}' is not a single class name",
            class
        )));
    }
    Ok(())
}

fn class_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let class = String::deserialize(deserializer)?;
    check_class_name(&class).map_err(D::Error::custom)?;
    Ok(class)
}
