//! Neuroplastic change prediction.
//!
//! Predicted changes are monotonic, saturating functions of elapsed
//! weeks: `rate * weeks` clamped at a per-dimension cap, so no estimate
//! grows without bound regardless of elapsed time. Negative rates (e.g.
//! amygdala hyperactivity reduction) saturate at the negated cap.

use serde::{Deserialize, Serialize};

use crate::foundation::BrainRegion;

/// Cap on predicted structural change (fraction of baseline volume).
pub const STRUCTURAL_CAP: f64 = 0.25;

/// Weekly functional improvement rate and its cap.
pub const FUNCTIONAL_RATE: f64 = 0.05;
pub const FUNCTIONAL_CAP: f64 = 0.5;

/// Weekly connectivity improvement rate and its cap.
pub const CONNECTIVITY_RATE: f64 = 0.08;
pub const CONNECTIVITY_CAP: f64 = 0.6;

/// Predicted neuroplastic change for one region after a span of practice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrainChangeEstimate {
    pub structural_change: f64,
    pub functional_change: f64,
    pub connectivity: f64,
}

/// Research-derived neuroplasticity timeline model.
pub struct NeuroplasticityModel;

impl NeuroplasticityModel {
    /// Weekly structural change rate for a region.
    ///
    /// Negative for regions where improvement means reduced volume or
    /// activity (amygdala hyperactivity).
    pub fn structural_rate(region: BrainRegion) -> f64 {
        match region {
            BrainRegion::Hippocampus => 0.02,
            BrainRegion::PrefrontalCortex => 0.015,
            BrainRegion::Amygdala => -0.01,
            BrainRegion::CorpusCallosum => 0.01,
            _ => 0.01,
        }
    }

    /// Predicts the change estimate for a region after `weeks` of practice.
    pub fn predict(region: BrainRegion, weeks: u32) -> BrainChangeEstimate {
        BrainChangeEstimate {
            structural_change: saturate(Self::structural_rate(region), weeks, STRUCTURAL_CAP),
            functional_change: saturate(FUNCTIONAL_RATE, weeks, FUNCTIONAL_CAP),
            connectivity: saturate(CONNECTIVITY_RATE, weeks, CONNECTIVITY_CAP),
        }
    }
}

fn saturate(rate: f64, weeks: u32, cap: f64) -> f64 {
    let raw = rate * f64::from(weeks);
    if rate >= 0.0 {
        raw.min(cap)
    } else {
        raw.max(-cap)
    }
}
