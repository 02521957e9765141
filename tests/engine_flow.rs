//! Integration tests for the full engine pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. Questionnaire responses aggregate into region impacts with provenance
//! 2. Severity synthesis and protective mitigation apply on top
//! 3. Synergy detection and pathway generation consume the finished map
//! 4. The progress tracker reduces an event log against the pathway
//!
//! Uses the bundled catalog and exercise library throughout.

use healing_compass::assessment::{assess, TraumaAnswer, UserResponseSet};
use healing_compass::catalog::{default_catalog, AgeCode, DurationCode};
use healing_compass::foundation::{BrainRegion, ExerciseId, Timestamp, TraumaId};
use healing_compass::pathway::{
    ExerciseLibrary, PathwayGenerator, PathwayPreferences, PhaseName, TraumaProfile,
};
use healing_compass::progress::{AdaptiveAction, ProgressEvent, ProgressTracker};
use healing_compass::synergy::{ConfidenceTier, SynergyCalculator};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn trauma(id: &str) -> TraumaId {
    TraumaId::new(id).unwrap()
}

fn age(code: &str) -> AgeCode {
    AgeCode::new(code).unwrap()
}

fn duration(code: &str) -> DurationCode {
    DurationCode::new(code).unwrap()
}

fn day(n: u64) -> Timestamp {
    Timestamp::from_unix_secs(n * 86_400)
}

// =============================================================================
// Scoring scenarios
// =============================================================================

#[test]
fn early_single_incident_scales_by_age_window() {
    let mut responses = UserResponseSet::new();
    responses.record(
        trauma("physical_abuse"),
        TraumaAnswer::yes()
            .with_age_codes(vec![age("0-3")])
            .with_duration(duration("single")),
    );

    let result = assess(&responses, default_catalog()).unwrap();
    // 18 * 3.0 * (1 + 0)
    assert!((result.region_impacts.total_for(BrainRegion::Amygdala) - 54.0).abs() < 1e-9);
}

#[test]
fn chronic_exposure_raises_the_same_contribution() {
    let mut responses = UserResponseSet::new();
    responses.record(
        trauma("physical_abuse"),
        TraumaAnswer::yes()
            .with_age_codes(vec![age("0-3")])
            .with_duration(duration(">3years")),
    );

    let result = assess(&responses, default_catalog()).unwrap();
    // 18 * 3.0 * (1 + 2.0 * 0.3)
    assert!((result.region_impacts.total_for(BrainRegion::Amygdala) - 86.4).abs() < 1e-9);
}

#[test]
fn multi_window_exposure_compounds_additively() {
    let mut responses = UserResponseSet::new();
    responses.record(
        trauma("physical_abuse"),
        TraumaAnswer::yes().with_age_codes(vec![age("0-3"), age("3-6")]),
    );

    let result = assess(&responses, default_catalog()).unwrap();
    // -12 * 3.0 and -12 * 2.0, summed.
    let pfc = result.region_impacts.get(BrainRegion::PrefrontalCortex).unwrap();
    assert!((pfc.total_impact - -60.0).abs() < 1e-9);
    assert_eq!(pfc.sources.len(), 2);
}

#[test]
fn protective_factor_mitigates_everything_by_thirty_percent() {
    let mut responses = UserResponseSet::new();
    responses.record(
        trauma("physical_abuse"),
        TraumaAnswer::yes()
            .with_age_codes(vec![age("0-3")])
            .with_duration(duration("single")),
    );
    responses.record(trauma("protective_adult"), TraumaAnswer::yes());

    let result = assess(&responses, default_catalog()).unwrap();
    assert!(result.protective_factor_applied);
    assert!((result.region_impacts.total_for(BrainRegion::Amygdala) - 37.8).abs() < 1e-9);
}

#[test]
fn empty_submission_is_a_clean_zero() {
    let result = assess(&UserResponseSet::new(), default_catalog()).unwrap();
    assert_eq!(result.ace_score, 0);
    assert_eq!(result.overall_severity, 0.0);
    assert!(result.region_impacts.is_empty());
    assert!(!result.protective_factor_applied);
}

// =============================================================================
// Full pipeline
// =============================================================================

fn heavy_responses() -> UserResponseSet {
    let mut responses = UserResponseSet::new();
    responses.record(
        trauma("physical_abuse"),
        TraumaAnswer::yes()
            .with_age_codes(vec![age("0-3")])
            .with_duration(duration(">3years")),
    );
    responses.record(
        trauma("emotional_abuse"),
        TraumaAnswer::yes().with_age_codes(vec![age("3-6")]),
    );
    responses.record(
        trauma("sexual_abuse"),
        TraumaAnswer::yes()
            .with_age_codes(vec![age("3-6")])
            .with_duration(duration("1-3years")),
    );
    responses.record(trauma("emotional_neglect"), TraumaAnswer::no());
    responses.record(trauma("substance_abuse"), TraumaAnswer::unsure());
    responses
}

#[test]
fn severity_reflects_age_weighted_ace_load() {
    let result = assess(&heavy_responses(), default_catalog()).unwrap();
    assert_eq!(result.ace_score, 3);
    // 3 * 0.8 * mean(3.0, 2.0, 2.0) = 5.6
    assert!((result.overall_severity - 5.6).abs() < 1e-9);
}

#[test]
fn severity_saturates_when_every_trauma_is_reported_early() {
    let mut responses = UserResponseSet::new();
    for id in [
        "physical_abuse",
        "sexual_abuse",
        "emotional_abuse",
        "physical_neglect",
        "emotional_neglect",
        "substance_abuse",
        "mental_illness",
        "domestic_violence",
    ] {
        responses.record(
            trauma(id),
            TraumaAnswer::yes().with_age_codes(vec![age("0-3")]),
        );
    }

    let result = assess(&responses, default_catalog()).unwrap();
    assert_eq!(result.ace_score, 8);
    // 8 * 0.8 * 3.0 = 19.2, held at the ceiling.
    assert!((result.overall_severity - 10.0).abs() < 1e-9);
}

#[test]
fn synergies_emerge_from_a_heavy_assessment() {
    init_tracing();
    let result = assess(&heavy_responses(), default_catalog()).unwrap();
    let effects = SynergyCalculator::compute(&result.region_impacts);

    // Reduced prefrontal + hyperactive amygdala is the canonical direct
    // pattern; the early windows here also trip the cascade rule.
    let patterns: Vec<&str> = effects.iter().map(|e| e.pattern.as_str()).collect();
    assert!(patterns.contains(&"Executive-Limbic Imbalance"));
    assert!(patterns.contains(&"Hub Disruption"));
    assert!(patterns.contains(&"Developmental Cascade"));

    // Tier ordering: all Direct effects precede all Emergent ones.
    let tiers: Vec<ConfidenceTier> = effects.iter().map(|e| e.tier).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    assert_eq!(tiers, sorted);

    // Recomputing yields the same output.
    assert_eq!(effects, SynergyCalculator::compute(&result.region_impacts));
}

#[test]
fn pathway_targets_the_regions_the_assessment_surfaced() {
    let result = assess(&heavy_responses(), default_catalog()).unwrap();
    let pathway = PathwayGenerator::generate(
        &result.region_impacts,
        &TraumaProfile {
            primary_traumas: vec![trauma("sexual_abuse")],
            developmental_stage: None,
        },
        &PathwayPreferences::default(),
        ExerciseLibrary::bundled(),
    );

    assert_eq!(pathway.phases.len(), 4);

    // The amygdala accumulates well past the custom-exercise threshold.
    assert!(pathway
        .custom_exercises
        .iter()
        .any(|e| e.name == "Fear Signal Recalibration"));

    // Corpus callosum impact (sexual abuse) unlocks bilateral work.
    let integration = pathway.phase(PhaseName::Integration).unwrap();
    assert!(integration
        .exercises
        .iter()
        .any(|e| e.name == "Cross-Brain Integration"));

    // Sexual abuse in the profile adapts the safety exercise.
    let safety = &pathway.phase(PhaseName::Stabilization).unwrap().exercises[0];
    assert!(!safety.adaptations.is_empty());
}

#[test]
fn tracker_closes_the_loop_over_a_generated_pathway() {
    init_tracing();
    let result = assess(&heavy_responses(), default_catalog()).unwrap();
    let pathway = PathwayGenerator::generate(
        &result.region_impacts,
        &TraumaProfile::empty(),
        &PathwayPreferences::default(),
        ExerciseLibrary::bundled(),
    );

    let exercise_id = ExerciseId::new("safety_signal_training").unwrap();
    let events: Vec<ProgressEvent> = (0..5)
        .map(|i| {
            ProgressEvent::completed(pathway.id, exercise_id.clone(), day(i))
                .with_difficulty([9, 8, 9, 7, 8][i as usize])
        })
        .collect();

    for event in &events {
        ProgressTracker::record_event(&pathway, event.clone()).unwrap();
    }

    let report = ProgressTracker::report(&pathway, &events, day(4));
    assert!((report.overall_progress - 100.0).abs() < 1e-9);
    assert_eq!(report.streak_days, 5);
    // Mean difficulty 8.2 exceeds the report threshold.
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.action == AdaptiveAction::ReduceIntensity));
}

#[test]
fn assessment_results_are_reproducible() {
    let first = assess(&heavy_responses(), default_catalog()).unwrap();
    let second = assess(&heavy_responses(), default_catalog()).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}
