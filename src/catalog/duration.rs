//! Exposure duration reference data.
//!
//! The modifier scales impact multiplicatively via `1 + modifier * 0.3`,
//! so a single incident (modifier 0) leaves the base contribution intact.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::ValidationError;

/// Code identifying an exposure duration level (e.g. `>3years`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationCode(String);

impl DurationCode {
    /// Creates a new DurationCode, returning error if empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty_field("duration_code"));
        }
        Ok(Self(code))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DurationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One exposure duration level with its impact modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationLevel {
    pub code: DurationCode,
    pub modifier: f64,
    pub label: String,
}

impl DurationLevel {
    /// Creates a new DurationLevel, validating the modifier is non-negative.
    pub fn try_new(
        code: impl Into<String>,
        modifier: f64,
        label: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if modifier < 0.0 {
            return Err(ValidationError::below_minimum(
                "duration_modifier",
                0.0,
                modifier,
            ));
        }
        Ok(Self {
            code: DurationCode::new(code)?,
            modifier,
            label: label.into(),
        })
    }
}
