//! Age range reference data.
//!
//! Earlier developmental windows carry strictly larger multipliers,
//! encoding heightened vulnerability of the developing brain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::ValidationError;

/// Code identifying an age range (e.g. `0-3`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeCode(String);

impl AgeCode {
    /// Creates a new AgeCode, returning error if empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty_field("age_code"));
        }
        Ok(Self(code))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One developmental age window with its vulnerability multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub code: AgeCode,
    pub multiplier: f64,
    pub description: String,
}

impl AgeRange {
    /// Creates a new AgeRange, validating the multiplier is at least 1.0.
    pub fn try_new(
        code: impl Into<String>,
        multiplier: f64,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if multiplier < 1.0 {
            return Err(ValidationError::below_minimum(
                "age_multiplier",
                1.0,
                multiplier,
            ));
        }
        Ok(Self {
            code: AgeCode::new(code)?,
            multiplier,
            description: description.into(),
        })
    }
}
