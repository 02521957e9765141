//! Overall severity synthesis and protective-factor mitigation.

use serde::{Deserialize, Serialize};

/// Severity contributed per ACE before age weighting.
pub const SEVERITY_PER_ACE: f64 = 0.8;

/// Ceiling the overall severity saturates at.
pub const SEVERITY_CEILING: f64 = 10.0;

/// Result of severity synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityOutcome {
    /// Overall severity in [0, 10].
    pub overall_severity: f64,
    pub protective_factor_applied: bool,
    /// Factor the impact map must be rescaled by (1.0 when no protective
    /// factor was reported).
    pub mitigation_factor: f64,
}

/// Stateless severity synthesis service.
pub struct SeveritySynthesizer;

impl SeveritySynthesizer {
    /// Reduces the ACE count and the age multipliers actually used into a
    /// scalar severity, applying protective mitigation when present.
    ///
    /// # Edge Cases
    /// - No age multipliers recorded: the mean falls back to 1.0
    /// - Any ACE count: severity saturates at the ceiling
    pub fn synthesize(
        ace_score: u32,
        age_multipliers_used: &[f64],
        mitigation: Option<f64>,
    ) -> SeverityOutcome {
        let base_severity = f64::from(ace_score) * SEVERITY_PER_ACE;

        let avg_age_multiplier = if age_multipliers_used.is_empty() {
            1.0
        } else {
            age_multipliers_used.iter().sum::<f64>() / age_multipliers_used.len() as f64
        };

        let mut overall_severity = (base_severity * avg_age_multiplier).min(SEVERITY_CEILING);

        let mitigation_factor = mitigation.map_or(1.0, |m| 1.0 - m);
        overall_severity *= mitigation_factor;

        SeverityOutcome {
            overall_severity,
            protective_factor_applied: mitigation.is_some(),
            mitigation_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_aces_give_zero_severity() {
        let outcome = SeveritySynthesizer::synthesize(0, &[], None);
        assert_eq!(outcome.overall_severity, 0.0);
        assert!(!outcome.protective_factor_applied);
        assert_eq!(outcome.mitigation_factor, 1.0);
    }

    #[test]
    fn severity_scales_with_ace_count_and_age() {
        // 2 * 0.8 * mean(3.0, 2.0) = 4.0
        let outcome = SeveritySynthesizer::synthesize(2, &[3.0, 2.0], None);
        assert!((outcome.overall_severity - 4.0).abs() < 1e-9);
    }

    #[test]
    fn empty_age_multipliers_fall_back_to_one() {
        let outcome = SeveritySynthesizer::synthesize(3, &[], None);
        assert!((outcome.overall_severity - 2.4).abs() < 1e-9);
    }

    #[test]
    fn severity_saturates_at_ceiling() {
        let outcome = SeveritySynthesizer::synthesize(8, &[3.0, 3.0, 3.0], None);
        assert_eq!(outcome.overall_severity, 10.0);
    }

    #[test]
    fn mitigation_scales_severity_by_complement() {
        let unmitigated = SeveritySynthesizer::synthesize(2, &[3.0], None);
        let mitigated = SeveritySynthesizer::synthesize(2, &[3.0], Some(0.30));

        assert!(mitigated.protective_factor_applied);
        assert!((mitigated.mitigation_factor - 0.7).abs() < 1e-9);
        assert!(
            (mitigated.overall_severity - unmitigated.overall_severity * 0.7).abs() < 1e-9
        );
    }

    #[test]
    fn mitigated_severity_stays_within_bounds() {
        let outcome = SeveritySynthesizer::synthesize(10, &[3.0], Some(0.30));
        assert!((outcome.overall_severity - 7.0).abs() < 1e-9);
        assert!(outcome.overall_severity >= 0.0 && outcome.overall_severity <= 10.0);
    }
}
