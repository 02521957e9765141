//! Derived interaction effect types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::BrainRegion;

/// Evidentiary strength of a detected pattern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ConfidenceTier {
    /// Directly documented relationship between the involved regions.
    Direct,
    /// Supported by converging lines of evidence.
    Convergent,
    /// Inferred from network-level co-occurrence patterns.
    Emergent,
}

impl ConfidenceTier {
    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::Direct => "Direct",
            ConfidenceTier::Convergent => "Convergent",
            ConfidenceTier::Emergent => "Emergent",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity banding for ratio-based imbalance patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImbalanceLevel {
    Severe,
    Moderate,
    Mild,
}

impl ImbalanceLevel {
    /// Bands a limbic/executive ratio: Severe > 1.5, Moderate > 1.0.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 1.5 {
            ImbalanceLevel::Severe
        } else if ratio > 1.0 {
            ImbalanceLevel::Moderate
        } else {
            ImbalanceLevel::Mild
        }
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            ImbalanceLevel::Severe => "Severe",
            ImbalanceLevel::Moderate => "Moderate",
            ImbalanceLevel::Mild => "Mild",
        }
    }
}

/// The quantitative finding a pattern rule reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SynergyMeasure {
    /// Ratio between opposing systems, banded by severity.
    Ratio { value: f64, level: ImbalanceLevel },
    /// Scalar magnitude of the combined disruption.
    Magnitude { value: f64 },
    /// Cross-system severity product.
    Severity { value: f64 },
    /// Amplification proportional to the number of affected systems.
    Amplification { affected_systems: usize, value: f64 },
    /// Fraction of network hubs disrupted.
    HubLoad { affected: usize, total: usize },
    /// Count of disrupted local clusters.
    ClustersDisrupted { count: usize },
}

/// A derived, higher-order interaction between impacted regions.
///
/// Recomputed on demand from an assessment result; never stored or
/// mutated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyEffect {
    pub pattern: String,
    pub regions: Vec<BrainRegion>,
    pub tier: ConfidenceTier,
    pub measure: SynergyMeasure,
    pub basis: String,
}
