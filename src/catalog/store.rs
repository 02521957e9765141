//! The trauma catalog: validated, immutable reference data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AgeCode, AgeRange, DurationCode, DurationLevel, TraumaDefinition};
use crate::foundation::{TraumaId, ValidationError};

/// Errors raised while constructing or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate trauma id '{id}'")]
    DuplicateTrauma { id: String },

    #[error("Trauma '{id}' has no region effects")]
    EmptyRegionEffects { id: String },

    #[error("Trauma '{id}' has mitigation {mitigation}, expected a fraction in (0, 1)")]
    InvalidMitigation { id: String, mitigation: f64 },

    #[error("Duplicate age code '{code}'")]
    DuplicateAgeCode { code: String },

    #[error("Age range '{code}' has multiplier {multiplier}, expected at least 1.0")]
    InvalidAgeMultiplier { code: String, multiplier: f64 },

    #[error("Duplicate duration code '{code}'")]
    DuplicateDurationCode { code: String },

    #[error("Duration level '{code}' has modifier {modifier}, expected non-negative")]
    InvalidDurationModifier { code: String, modifier: f64 },

    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Immutable lookup structure over trauma definitions and the age/duration
/// scales they are weighted by.
///
/// Constructed once at process start and passed into engine functions as a
/// parameter; the engine never consults a hidden global.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraumaCatalog {
    traumas: Vec<TraumaDefinition>,
    age_ranges: Vec<AgeRange>,
    duration_levels: Vec<DurationLevel>,
}

#[derive(Deserialize)]
struct CatalogDoc {
    traumas: Vec<TraumaDefinition>,
    age_ranges: Vec<AgeRange>,
    duration_levels: Vec<DurationLevel>,
}

impl TraumaCatalog {
    /// Creates a catalog, validating all entries.
    pub fn new(
        traumas: Vec<TraumaDefinition>,
        age_ranges: Vec<AgeRange>,
        duration_levels: Vec<DurationLevel>,
    ) -> Result<Self, CatalogError> {
        for (i, trauma) in traumas.iter().enumerate() {
            if traumas[..i].iter().any(|t| t.id == trauma.id) {
                return Err(CatalogError::DuplicateTrauma {
                    id: trauma.id.as_str().to_string(),
                });
            }
            if let Some(effects) = trauma.region_effects() {
                if effects.is_empty() {
                    return Err(CatalogError::EmptyRegionEffects {
                        id: trauma.id.as_str().to_string(),
                    });
                }
            }
            if let Some(mitigation) = trauma.mitigation() {
                if mitigation <= 0.0 || mitigation >= 1.0 {
                    return Err(CatalogError::InvalidMitigation {
                        id: trauma.id.as_str().to_string(),
                        mitigation,
                    });
                }
            }
        }

        for (i, range) in age_ranges.iter().enumerate() {
            if age_ranges[..i].iter().any(|r| r.code == range.code) {
                return Err(CatalogError::DuplicateAgeCode {
                    code: range.code.as_str().to_string(),
                });
            }
            if range.multiplier < 1.0 {
                return Err(CatalogError::InvalidAgeMultiplier {
                    code: range.code.as_str().to_string(),
                    multiplier: range.multiplier,
                });
            }
        }

        for (i, level) in duration_levels.iter().enumerate() {
            if duration_levels[..i].iter().any(|l| l.code == level.code) {
                return Err(CatalogError::DuplicateDurationCode {
                    code: level.code.as_str().to_string(),
                });
            }
            if level.modifier < 0.0 {
                return Err(CatalogError::InvalidDurationModifier {
                    code: level.code.as_str().to_string(),
                    modifier: level.modifier,
                });
            }
        }

        Ok(Self {
            traumas,
            age_ranges,
            duration_levels,
        })
    }

    /// Loads a catalog from a YAML document, applying the same validation
    /// as `new`. Region names in the document may use known aliases.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = serde_yaml::from_str(yaml)?;
        Self::new(doc.traumas, doc.age_ranges, doc.duration_levels)
    }

    /// Returns all trauma definitions in catalog order.
    pub fn traumas(&self) -> &[TraumaDefinition] {
        &self.traumas
    }

    /// Looks up a trauma definition by id.
    pub fn get(&self, id: &TraumaId) -> Option<&TraumaDefinition> {
        self.traumas.iter().find(|t| &t.id == id)
    }

    /// Returns all age ranges in catalog order.
    pub fn age_ranges(&self) -> &[AgeRange] {
        &self.age_ranges
    }

    /// Looks up an age range by code.
    pub fn age_range(&self, code: &AgeCode) -> Option<&AgeRange> {
        self.age_ranges.iter().find(|r| &r.code == code)
    }

    /// Returns all duration levels in catalog order.
    pub fn duration_levels(&self) -> &[DurationLevel] {
        &self.duration_levels
    }

    /// Looks up a duration level by code.
    pub fn duration_level(&self, code: &DurationCode) -> Option<&DurationLevel> {
        self.duration_levels.iter().find(|l| &l.code == code)
    }
}
