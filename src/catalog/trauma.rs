//! Trauma definitions: region effects for adverse experiences and
//! mitigation data for protective factors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::{BrainRegion, TraumaId, ValidationError};

/// Fixed taxonomy of questionnaire item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraumaCategory {
    Abuse,
    Neglect,
    HouseholdDysfunction,
    ProtectiveFactor,
}

impl TraumaCategory {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            TraumaCategory::Abuse => "Abuse",
            TraumaCategory::Neglect => "Neglect",
            TraumaCategory::HouseholdDysfunction => "Household Dysfunction",
            TraumaCategory::ProtectiveFactor => "Protective Factor",
        }
    }
}

impl fmt::Display for TraumaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A documented effect of one trauma on one brain region.
///
/// `base_impact` is a signed percentage: negative for volume/activity
/// reduction, positive for hyperactivation or enlargement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEffect {
    pub region: BrainRegion,
    pub base_impact: f64,
    pub citation: String,
}

impl RegionEffect {
    /// Creates a new RegionEffect.
    pub fn new(region: BrainRegion, base_impact: f64, citation: impl Into<String>) -> Self {
        Self {
            region,
            base_impact,
            citation: citation.into(),
        }
    }
}

/// What a trauma definition contributes to scoring.
///
/// Adverse items carry per-region base impacts; protective items carry a
/// single mitigation fraction. The split is structural, so a definition
/// can never hold both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraumaKind {
    Adverse { region_effects: Vec<RegionEffect> },
    Protective { mitigation: f64, citation: String },
}

/// One entry of the trauma catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraumaDefinition {
    pub id: TraumaId,
    pub category: TraumaCategory,
    #[serde(flatten)]
    pub kind: TraumaKind,
}

impl TraumaDefinition {
    /// Creates an adverse trauma definition.
    pub fn adverse(
        id: impl Into<String>,
        category: TraumaCategory,
        region_effects: Vec<RegionEffect>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: TraumaId::new(id)?,
            category,
            kind: TraumaKind::Adverse { region_effects },
        })
    }

    /// Creates a protective factor definition.
    ///
    /// `mitigation` is the fraction of impact removed (e.g. 0.30).
    pub fn protective(
        id: impl Into<String>,
        mitigation: f64,
        citation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: TraumaId::new(id)?,
            category: TraumaCategory::ProtectiveFactor,
            kind: TraumaKind::Protective {
                mitigation,
                citation: citation.into(),
            },
        })
    }

    /// Returns true for protective factor entries.
    pub fn is_protective(&self) -> bool {
        matches!(self.kind, TraumaKind::Protective { .. })
    }

    /// Returns the region effects for adverse entries.
    pub fn region_effects(&self) -> Option<&[RegionEffect]> {
        match &self.kind {
            TraumaKind::Adverse { region_effects } => Some(region_effects),
            TraumaKind::Protective { .. } => None,
        }
    }

    /// Returns the mitigation fraction for protective entries.
    pub fn mitigation(&self) -> Option<f64> {
        match &self.kind {
            TraumaKind::Adverse { .. } => None,
            TraumaKind::Protective { mitigation, .. } => Some(*mitigation),
        }
    }
}
