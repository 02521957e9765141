//! The assessment result and the composing entry point.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    AssessmentError, ImpactAggregator, RegionImpacts, SeveritySynthesizer, UserResponseSet,
};
use crate::catalog::TraumaCatalog;

/// The finished assessment: the sole data contract presentation and
/// downstream engine stages consume. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub ace_score: u32,
    pub overall_severity: f64,
    pub protective_factor_applied: bool,
    pub region_impacts: RegionImpacts,
}

/// Runs the full scoring pipeline: aggregation, severity synthesis, and
/// protective mitigation.
///
/// Mitigation rescales every region total and every source contribution,
/// so provenance still sums to the reported totals afterwards.
pub fn assess(
    responses: &UserResponseSet,
    catalog: &TraumaCatalog,
) -> Result<AssessmentResult, AssessmentError> {
    let mut aggregation = ImpactAggregator::aggregate(responses, catalog)?;
    let outcome = SeveritySynthesizer::synthesize(
        aggregation.ace_score,
        &aggregation.age_multipliers_used,
        aggregation.mitigation,
    );

    if outcome.protective_factor_applied {
        aggregation.region_impacts.scale(outcome.mitigation_factor);
    }

    debug!(
        ace_score = aggregation.ace_score,
        regions_affected = aggregation.region_impacts.len(),
        overall_severity = outcome.overall_severity,
        protective = outcome.protective_factor_applied,
        "assessment complete"
    );

    Ok(AssessmentResult {
        ace_score: aggregation.ace_score,
        overall_severity: outcome.overall_severity,
        protective_factor_applied: outcome.protective_factor_applied,
        region_impacts: aggregation.region_impacts,
    })
}
