//! Pathway module - Four-phase healing plan generation.
//!
//! Consumes region impacts and a trauma-profile summary and produces a
//! fixed-sequence intervention plan: stabilization, processing,
//! integration, then open-ended growth. Exercise selection is
//! deterministic template lookup against an immutable library; milestones
//! carry bounded neuroplastic-change predictions.

mod exercise;
mod generator;
mod milestone;
mod neuroplasticity;
mod phase;
mod profile;

pub use exercise::{
    CustomExercise, CustomExerciseRule, Exercise, ExerciseKind, ExerciseLibrary,
    ExercisePriority, Frequency,
};
pub use generator::{
    HealingPathway, PathwayGenerator, PathwayPreferences, SIGNIFICANCE_THRESHOLD,
};
pub use milestone::{Milestone, Reward, RewardKind};
pub use neuroplasticity::{
    BrainChangeEstimate, NeuroplasticityModel, CONNECTIVITY_CAP, CONNECTIVITY_RATE,
    FUNCTIONAL_CAP, FUNCTIONAL_RATE, STRUCTURAL_CAP,
};
pub use phase::{Phase, PhaseName, WeekRange};
pub use profile::{Adaptation, AdaptationKind, DevelopmentalStage, TraumaProfile};
