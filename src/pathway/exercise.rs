//! Exercise templates and the region-keyed template library.
//!
//! Templates are reference data: built once, validated, and passed into
//! the generator as an explicit collaborator. Selection is deterministic
//! template lookup, never free-form generation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::Adaptation;
use crate::foundation::{BrainRegion, ExerciseId, ValidationError};

/// Therapeutic modality of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Regulation,
    Grounding,
    Desensitization,
    Integration,
    Neuroplasticity,
    Cognitive,
    Metacognition,
    Interoception,
    Awareness,
    Processing,
    MeaningMaking,
    Growth,
    Altruism,
    Projection,
    Bilateral,
    Memory,
}

/// How often an exercise is practiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    TimesPerWeek(u8),
    TimesPerDay(u8),
    AsNeeded,
    Optional,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::TimesPerWeek(n) => write!(f, "{}x/week", n),
            Frequency::TimesPerDay(n) => write!(f, "{}x/day", n),
            Frequency::AsNeeded => write!(f, "as needed"),
            Frequency::Optional => write!(f, "optional"),
        }
    }
}

/// Priority tag for exercises the plan front-loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExercisePriority {
    High,
    Medium,
    Low,
}

/// One practice exercise in a pathway phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub kind: ExerciseKind,
    pub description: String,
    pub session_length: String,
    pub frequency: Frequency,
    pub techniques: Vec<String>,
    #[serde(default)]
    pub requires_support: bool,
    #[serde(default)]
    pub priority: Option<ExercisePriority>,
    #[serde(default)]
    pub adaptations: Vec<Adaptation>,
}

impl Exercise {
    /// Returns a copy tagged with the given priority.
    pub fn with_priority(mut self, priority: ExercisePriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns a copy with the given adaptations attached.
    pub fn with_adaptations(mut self, adaptations: Vec<Adaptation>) -> Self {
        self.adaptations = adaptations;
        self
    }
}

/// A threshold-unlocked exercise with step-by-step instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomExercise {
    pub id: ExerciseId,
    pub name: String,
    pub kind: ExerciseKind,
    pub description: String,
    pub instructions: Vec<String>,
    pub neuroscience: String,
}

/// Unlock rule for a custom exercise: fires when the magnitude of the
/// region's total impact reaches the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomExerciseRule {
    pub region: BrainRegion,
    pub threshold: f64,
    pub template: CustomExercise,
}

/// Immutable exercise reference data the generator selects from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLibrary {
    region_exercises: BTreeMap<BrainRegion, Vec<Exercise>>,
    stabilization_core: Vec<Exercise>,
    processing_core: Vec<Exercise>,
    integration_core: Vec<Exercise>,
    integration_bilateral: Exercise,
    growth_core: Vec<Exercise>,
    custom_rules: Vec<CustomExerciseRule>,
}

impl ExerciseLibrary {
    /// Creates a library from its parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        region_exercises: BTreeMap<BrainRegion, Vec<Exercise>>,
        stabilization_core: Vec<Exercise>,
        processing_core: Vec<Exercise>,
        integration_core: Vec<Exercise>,
        integration_bilateral: Exercise,
        growth_core: Vec<Exercise>,
        custom_rules: Vec<CustomExerciseRule>,
    ) -> Self {
        Self {
            region_exercises,
            stabilization_core,
            processing_core,
            integration_core,
            integration_bilateral,
            growth_core,
            custom_rules,
        }
    }

    /// Returns the bundled template library.
    pub fn bundled() -> &'static ExerciseLibrary {
        &BUNDLED_LIBRARY
    }

    /// Exercises targeting a region; empty when the region is unmapped.
    pub fn region_exercises(&self, region: BrainRegion) -> &[Exercise] {
        self.region_exercises
            .get(&region)
            .map_or(&[], |v| v.as_slice())
    }

    /// Finds a region exercise by name.
    pub fn region_exercise_named(&self, region: BrainRegion, name: &str) -> Option<&Exercise> {
        self.region_exercises(region).iter().find(|e| e.name == name)
    }

    /// Fixed coping/resourcing exercises for the stabilization phase.
    pub fn stabilization_core(&self) -> &[Exercise] {
        &self.stabilization_core
    }

    /// Fixed exercises for the processing phase.
    pub fn processing_core(&self) -> &[Exercise] {
        &self.processing_core
    }

    /// Fixed exercises for the integration phase.
    pub fn integration_core(&self) -> &[Exercise] {
        &self.integration_core
    }

    /// Bilateral integration exercise, gated on corpus callosum impact.
    pub fn integration_bilateral(&self) -> &Exercise {
        &self.integration_bilateral
    }

    /// Fixed exercises for the growth phase.
    pub fn growth_core(&self) -> &[Exercise] {
        &self.growth_core
    }

    /// Threshold rules for custom exercise selection.
    pub fn custom_rules(&self) -> &[CustomExerciseRule] {
        &self.custom_rules
    }
}

static BUNDLED_LIBRARY: Lazy<ExerciseLibrary> =
    Lazy::new(|| build_bundled_library().expect("bundled exercise templates are valid"));

fn exercise(
    slug: &str,
    name: &str,
    kind: ExerciseKind,
    description: &str,
    session_length: &str,
    frequency: Frequency,
    techniques: &[&str],
) -> Result<Exercise, ValidationError> {
    Ok(Exercise {
        id: ExerciseId::new(slug)?,
        name: name.to_string(),
        kind,
        description: description.to_string(),
        session_length: session_length.to_string(),
        frequency,
        techniques: techniques.iter().map(|t| t.to_string()).collect(),
        requires_support: false,
        priority: None,
        adaptations: Vec::new(),
    })
}

fn build_bundled_library() -> Result<ExerciseLibrary, ValidationError> {
    use ExerciseKind::*;

    let mut region_exercises = BTreeMap::new();
    region_exercises.insert(
        BrainRegion::Hippocampus,
        vec![
            exercise(
                "memory_palace_reconstruction",
                "Memory Palace Reconstruction",
                Neuroplasticity,
                "Build positive memory associations to counteract traumatic imprints",
                "15 min",
                Frequency::Daily,
                &["visualization", "spatial_memory", "positive_association"],
            )?,
            exercise(
                "bilateral_storytelling",
                "Bilateral Storytelling",
                Integration,
                "Alternate between left/right sensory input while recounting positive memories",
                "20 min",
                Frequency::TimesPerWeek(3),
                &["bilateral_stimulation", "narrative_therapy"],
            )?,
        ],
    );
    region_exercises.insert(
        BrainRegion::Amygdala,
        vec![
            exercise(
                "safety_signal_training",
                "Safety Signal Training",
                Regulation,
                "Train your amygdala to recognize safety cues",
                "10 min",
                Frequency::Daily,
                &["breathing", "grounding", "safety_anchoring"],
            )?,
            exercise(
                "graduated_exposure_vr",
                "Graduated Exposure VR",
                Desensitization,
                "Gentle, controlled exposure to triggers in safe VR environment",
                "20-30 min",
                Frequency::TimesPerWeek(2),
                &["vr_therapy", "systematic_desensitization"],
            )?,
        ],
    );
    region_exercises.insert(
        BrainRegion::PrefrontalCortex,
        vec![
            exercise(
                "executive_function_games",
                "Executive Function Games",
                Cognitive,
                "Strengthen executive control through targeted brain training",
                "15 min",
                Frequency::Daily,
                &["cognitive_training", "working_memory", "inhibition"],
            )?,
            exercise(
                "mindful_decision_trees",
                "Mindful Decision Trees",
                Metacognition,
                "Practice conscious decision-making pathways",
                "10 min",
                Frequency::Daily,
                &["mindfulness", "decision_mapping"],
            )?,
        ],
    );
    region_exercises.insert(
        BrainRegion::Insula,
        vec![
            exercise(
                "body_scan_meditation",
                "Body Scan Meditation",
                Interoception,
                "Rebuild healthy body awareness and internal sensing",
                "20 min",
                Frequency::Daily,
                &["body_awareness", "meditation", "somatic"],
            )?,
            exercise(
                "emotional_thermometer",
                "Emotional Thermometer",
                Awareness,
                "Track and understand emotional-physical connections",
                "5 min",
                Frequency::TimesPerDay(3),
                &["emotion_tracking", "somatic_awareness"],
            )?,
        ],
    );

    let stabilization_core = vec![
        exercise(
            "window_of_tolerance_expansion",
            "Window of Tolerance Expansion",
            Regulation,
            "Gradually expand your emotional comfort zone",
            "10-15 min",
            Frequency::Daily,
            &["titration", "pendulation", "resourcing"],
        )?,
        exercise(
            "five_senses_grounding",
            "5-4-3-2-1 Grounding",
            Grounding,
            "Sensory grounding technique for overwhelming moments",
            "5 min",
            Frequency::AsNeeded,
            &["sensory_grounding", "present_moment"],
        )?,
    ];

    let mut narrative_exposure = exercise(
        "narrative_exposure_therapy",
        "Narrative Exposure Therapy",
        Processing,
        "Structured storytelling to process trauma narrative",
        "45 min",
        Frequency::Weekly,
        &["narrative_therapy", "exposure", "integration"],
    )?;
    narrative_exposure.requires_support = true;
    let processing_core = vec![narrative_exposure];

    let integration_core = vec![
        exercise(
            "neural_network_rebuilding",
            "Neural Network Rebuilding",
            Neuroplasticity,
            "Activities to forge new, healthy neural connections",
            "20 min",
            Frequency::Daily,
            &["cross_lateral", "novel_learning", "creativity"],
        )?,
        exercise(
            "values_clarification",
            "Values Clarification",
            MeaningMaking,
            "Reconnect with personal values and life meaning",
            "30 min",
            Frequency::Weekly,
            &["act", "values_work", "commitment"],
        )?,
    ];

    let integration_bilateral = exercise(
        "cross_brain_integration",
        "Cross-Brain Integration",
        Bilateral,
        "Activities that integrate left and right brain",
        "15 min",
        Frequency::Daily,
        &["cross_crawl", "bilateral_drawing", "music_movement"],
    )?;

    let growth_core = vec![
        exercise(
            "resilience_portfolio",
            "Resilience Portfolio",
            Growth,
            "Document and celebrate your healing journey",
            "30 min",
            Frequency::Weekly,
            &["reflection", "gratitude", "achievement"],
        )?,
        exercise(
            "helping_others_heal",
            "Helping Others Heal",
            Altruism,
            "Share your story to help others (when ready)",
            "varies",
            Frequency::Optional,
            &["peer_support", "mentoring", "advocacy"],
        )?,
        exercise(
            "future_self_visualization",
            "Future Self Visualization",
            Projection,
            "Connect with your healed future self",
            "15 min",
            Frequency::TimesPerWeek(2),
            &["visualization", "future_pacing", "hope"],
        )?,
    ];

    let custom_rules = vec![
        CustomExerciseRule {
            region: BrainRegion::Hippocampus,
            threshold: 70.0,
            template: CustomExercise {
                id: ExerciseId::new("temporal_bridge_building")?,
                name: "Temporal Bridge Building".to_string(),
                kind: Memory,
                description: "Connect positive past, present, and future memories".to_string(),
                instructions: vec![
                    "Recall a positive memory from before the trauma".to_string(),
                    "Find a recent positive moment".to_string(),
                    "Imagine a positive future scene".to_string(),
                    "Build mental bridges between all three".to_string(),
                    "Practice traveling these bridges daily".to_string(),
                ],
                neuroscience:
                    "Strengthens temporal lobe connections and hippocampal neurogenesis"
                        .to_string(),
            },
        },
        CustomExerciseRule {
            region: BrainRegion::Amygdala,
            threshold: 70.0,
            template: CustomExercise {
                id: ExerciseId::new("fear_signal_recalibration")?,
                name: "Fear Signal Recalibration".to_string(),
                kind: Regulation,
                description: "Retrain your alarm system with precision".to_string(),
                instructions: vec![
                    "Create a fear thermometer from 0-10".to_string(),
                    "Practice rating fear levels throughout the day".to_string(),
                    "When fear exceeds 5, use box breathing (4-4-4-4)".to_string(),
                    "Journal: real danger or trauma echo?".to_string(),
                    "Celebrate accurate threat detection".to_string(),
                ],
                neuroscience: "Recalibrates amygdala threat detection threshold".to_string(),
            },
        },
    ];

    Ok(ExerciseLibrary::new(
        region_exercises,
        stabilization_core,
        processing_core,
        integration_core,
        integration_bilateral,
        growth_core,
        custom_rules,
    ))
}
