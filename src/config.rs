//! Class names and event identifiers used by the synchronizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages normally rely on the Phosphor defaults in [`crate::consts`]. A page
//! that uses other class names passes a JSON object to `configure`; omitted
//! keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::marker::{Glyph, Membership};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a single class name, got {value:?}")]
    Whitespace { field: &'static str, value: String },
    #[error("{first} and {second} share the class name {value:?}")]
    Duplicate {
        first: &'static str,
        second: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillConfig {
    pub fill_if_dark: String,
    pub fill_if_light: String,
    pub outline: String,
    pub filled: String,
    pub dark_query: String,
    pub swap_event: String,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            fill_if_dark: consts::FILL_IF_DARK.to_owned(),
            fill_if_light: consts::FILL_IF_LIGHT.to_owned(),
            outline: consts::GLYPH_OUTLINE.to_owned(),
            filled: consts::GLYPH_FILLED.to_owned(),
            dark_query: consts::DARK_SCHEME_QUERY.to_owned(),
            swap_event: consts::CONTENT_SWAP_EVENT.to_owned(),
        }
    }
}

impl FillConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown keys, and
    /// the other variants when [`FillConfig::validate`] rejects the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every class name is a usable, distinct DOM token.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let classes = self.classes();
        for (field, value) in classes {
            if value.is_empty() {
                return Err(ConfigError::Empty { field });
            }
            if value.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(ConfigError::Whitespace {
                    field,
                    value: value.to_owned(),
                });
            }
        }
        for (i, &(first, a)) in classes.iter().enumerate() {
            if let Some(&(second, _)) = classes[i + 1..].iter().find(|&&(_, b)| a == b) {
                return Err(ConfigError::Duplicate {
                    first,
                    second,
                    value: a.to_owned(),
                });
            }
        }
        if self.dark_query.trim().is_empty() {
            return Err(ConfigError::Empty { field: "dark_query" });
        }
        if self.swap_event.trim().is_empty() {
            return Err(ConfigError::Empty { field: "swap_event" });
        }
        Ok(())
    }

    #[must_use]
    pub fn membership_class(&self, membership: Membership) -> &str {
        match membership {
            Membership::FillIfDark => &self.fill_if_dark,
            Membership::FillIfLight => &self.fill_if_light,
        }
    }

    #[must_use]
    pub fn glyph_class(&self, glyph: Glyph) -> &str {
        match glyph {
            Glyph::Outline => &self.outline,
            Glyph::Filled => &self.filled,
        }
    }

    fn classes(&self) -> [(&'static str, &str); 4] {
        [
            ("fill_if_dark", self.fill_if_dark.as_str()),
            ("fill_if_light", self.fill_if_light.as_str()),
            ("outline", self.outline.as_str()),
            ("filled", self.filled.as_str()),
        ]
    }
}
