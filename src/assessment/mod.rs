//! Assessment module - Impact aggregation and severity synthesis.
//!
//! Turns a validated questionnaire response set into a per-region impact
//! map with full provenance, then reduces it to a scalar severity with
//! protective-factor mitigation. Stages run in order and each is a pure
//! function of the previous stage's complete output.

mod aggregator;
mod errors;
mod region_impact;
mod response;
mod result;
mod severity;

pub use aggregator::{Aggregation, ImpactAggregator, DURATION_WEIGHT};
pub use errors::AssessmentError;
pub use region_impact::{ImpactSource, RegionImpact, RegionImpacts};
pub use response::{Answer, TraumaAnswer, UserResponseSet};
pub use result::{assess, AssessmentResult};
pub use severity::{SeverityOutcome, SeveritySynthesizer, SEVERITY_CEILING, SEVERITY_PER_ACE};
