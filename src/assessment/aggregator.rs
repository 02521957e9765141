//! Impact aggregation: responses + catalog -> per-region impact map.

use super::{Answer, AssessmentError, ImpactSource, RegionImpacts, UserResponseSet};
use crate::catalog::TraumaCatalog;

/// Weight of the duration modifier in the contribution formula
/// `base * age_multiplier * (1 + modifier * DURATION_WEIGHT)`.
pub const DURATION_WEIGHT: f64 = 0.3;

/// Raw aggregation output, before severity synthesis and mitigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub region_impacts: RegionImpacts,
    /// Count of non-protective items answered yes.
    pub ace_score: u32,
    /// Every age multiplier actually applied, one entry per age code per
    /// answered trauma. Feeds the severity synthesizer's mean.
    pub age_multipliers_used: Vec<f64>,
    /// Mitigation fraction of the first protective item answered yes.
    pub mitigation: Option<f64>,
}

/// Stateless aggregation service.
pub struct ImpactAggregator;

impl ImpactAggregator {
    /// Aggregates questionnaire responses into a per-region impact map.
    ///
    /// Fails fast on malformed input (unknown trauma/age/duration codes,
    /// follow-up data where none is taken); unsure and no answers
    /// contribute nothing. Iteration follows catalog order, so source
    /// lists come out in a stable, reproducible order.
    pub fn aggregate(
        responses: &UserResponseSet,
        catalog: &TraumaCatalog,
    ) -> Result<Aggregation, AssessmentError> {
        Self::validate(responses, catalog)?;

        let mut region_impacts = RegionImpacts::new();
        let mut ace_score = 0u32;
        let mut age_multipliers_used = Vec::new();
        let mut mitigation = None;

        for trauma in catalog.traumas() {
            let answer = match responses.answer(&trauma.id) {
                Some(answer) if answer.answered == Answer::Yes => answer,
                _ => continue,
            };

            if trauma.is_protective() {
                // Only the first protective item contributes; further
                // protective answers do not compound.
                if mitigation.is_none() {
                    mitigation = trauma.mitigation();
                }
                continue;
            }

            ace_score += 1;

            let duration_modifier = match &answer.duration {
                Some(code) => {
                    catalog
                        .duration_level(code)
                        .ok_or_else(|| AssessmentError::UnknownDurationCode {
                            trauma: trauma.id.as_str().to_string(),
                            code: code.as_str().to_string(),
                        })?
                        .modifier
                }
                None => 0.0,
            };
            let duration_factor = 1.0 + duration_modifier * DURATION_WEIGHT;

            // One weighted term per reported age window; chronic exposure
            // across several windows compounds additively. No reported
            // window means a single unweighted term.
            let mut age_terms = Vec::new();
            if answer.age_codes.is_empty() {
                age_terms.push((None, 1.0));
            } else {
                for code in &answer.age_codes {
                    let range = catalog.age_range(code).ok_or_else(|| {
                        AssessmentError::UnknownAgeCode {
                            trauma: trauma.id.as_str().to_string(),
                            code: code.as_str().to_string(),
                        }
                    })?;
                    age_terms.push((Some(code.clone()), range.multiplier));
                    age_multipliers_used.push(range.multiplier);
                }
            }

            if let Some(effects) = trauma.region_effects() {
                for effect in effects {
                    for (age, age_multiplier) in &age_terms {
                        let contribution =
                            effect.base_impact * age_multiplier * duration_factor;
                        region_impacts.accumulate(
                            effect.region,
                            ImpactSource {
                                trauma: trauma.id.clone(),
                                contributed_impact: contribution,
                                citation: effect.citation.clone(),
                                age: age.clone(),
                                age_multiplier: *age_multiplier,
                            },
                        );
                    }
                }
            }
        }

        Ok(Aggregation {
            region_impacts,
            ace_score,
            age_multipliers_used,
            mitigation,
        })
    }

    fn validate(
        responses: &UserResponseSet,
        catalog: &TraumaCatalog,
    ) -> Result<(), AssessmentError> {
        for (id, answer) in responses.iter() {
            let trauma = catalog
                .get(id)
                .ok_or_else(|| AssessmentError::UnknownTrauma {
                    id: id.as_str().to_string(),
                })?;

            let takes_follow_ups = answer.answered == Answer::Yes && !trauma.is_protective();
            if !takes_follow_ups
                && (!answer.age_codes.is_empty() || answer.duration.is_some())
            {
                return Err(AssessmentError::UnexpectedFollowUp {
                    trauma: id.as_str().to_string(),
                });
            }

            if takes_follow_ups {
                for code in &answer.age_codes {
                    if catalog.age_range(code).is_none() {
                        return Err(AssessmentError::UnknownAgeCode {
                            trauma: id.as_str().to_string(),
                            code: code.as_str().to_string(),
                        });
                    }
                }
                if let Some(code) = &answer.duration {
                    if catalog.duration_level(code).is_none() {
                        return Err(AssessmentError::UnknownDurationCode {
                            trauma: id.as_str().to_string(),
                            code: code.as_str().to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
