//! Healing pathway generation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use super::{
    Adaptation, AdaptationKind, CustomExercise, DevelopmentalStage, Exercise, ExerciseKind,
    ExerciseLibrary, ExercisePriority, Milestone, NeuroplasticityModel, Phase, PhaseName,
    Reward, RewardKind, TraumaProfile, WeekRange,
};
use crate::assessment::RegionImpacts;
use crate::foundation::{BrainRegion, ExerciseId, PathwayId, Timestamp};

/// Impact magnitude above which a region drives exercise selection.
pub const SIGNIFICANCE_THRESHOLD: f64 = 30.0;

/// How many top-ranked regions contribute processing exercises.
const PROCESSING_REGION_COUNT: usize = 3;

/// Caller preferences for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayPreferences {
    /// When false, exercises that require a support person are left out.
    pub include_support_required: bool,
}

impl Default for PathwayPreferences {
    fn default() -> Self {
        Self {
            include_support_required: true,
        }
    }
}

/// A generated four-phase intervention plan.
///
/// Created once from an assessment; progress results are appended by the
/// tracker, the phases themselves are never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealingPathway {
    pub id: PathwayId,
    pub created_at: Timestamp,
    pub phases: Vec<Phase>,
    pub custom_exercises: Vec<CustomExercise>,
    pub milestones: Vec<Milestone>,
    pub total_duration: WeekRange,
}

impl HealingPathway {
    /// Returns the phase with the given name.
    pub fn phase(&self, name: PhaseName) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == name)
    }

    /// Returns true if any phase or custom exercise carries the id.
    pub fn contains_exercise(&self, id: &ExerciseId) -> bool {
        self.phases.iter().any(|p| p.contains_exercise(id))
            || self.custom_exercises.iter().any(|e| &e.id == id)
    }
}

/// Stateless pathway generation service.
pub struct PathwayGenerator;

impl PathwayGenerator {
    /// Generates a pathway from the finished impact map and profile
    /// summary.
    ///
    /// Selection is deterministic: the same inputs always produce the
    /// same phases, exercises, and milestones (ids and creation time
    /// aside).
    pub fn generate(
        impacts: &RegionImpacts,
        profile: &TraumaProfile,
        preferences: &PathwayPreferences,
        library: &ExerciseLibrary,
    ) -> HealingPathway {
        let significant = Self::significant_regions(impacts);

        let mut phases = vec![
            Self::stabilization_phase(profile, library),
            Self::processing_phase(&significant, profile, library),
            Self::integration_phase(impacts, library),
            Self::growth_phase(library),
        ];

        if !preferences.include_support_required {
            for phase in &mut phases {
                phase.exercises.retain(|e| !e.requires_support);
            }
        }

        let custom_exercises = Self::custom_exercises(impacts, library);
        let milestones = Self::milestones(&phases);
        let total_duration = Self::total_duration(&phases);

        debug!(
            significant_regions = significant.len(),
            custom_exercises = custom_exercises.len(),
            milestones = milestones.len(),
            "pathway generated"
        );

        HealingPathway {
            id: PathwayId::new(),
            created_at: Timestamp::now(),
            phases,
            custom_exercises,
            milestones,
            total_duration,
        }
    }

    /// Regions above the significance threshold, ranked by impact
    /// magnitude descending (canonical region order breaks ties).
    fn significant_regions(impacts: &RegionImpacts) -> Vec<BrainRegion> {
        let mut ranked: Vec<(BrainRegion, f64)> = impacts
            .iter()
            .filter(|i| i.total_impact.abs() > SIGNIFICANCE_THRESHOLD)
            .map(|i| (i.region, i.total_impact.abs()))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.into_iter().map(|(region, _)| region).collect()
    }

    fn stabilization_adaptations(profile: &TraumaProfile) -> Vec<Adaptation> {
        let mut adaptations = Vec::new();
        if profile.has_primary("sexual_abuse") {
            adaptations.push(Adaptation::new(
                AdaptationKind::BodySafety,
                "Start with external focus, gradually move to body awareness",
            ));
        }
        if profile.developmental_stage == Some(DevelopmentalStage::EarlyChildhood) {
            adaptations.push(Adaptation::new(
                AdaptationKind::PlayBased,
                "Incorporate play and creative elements",
            ));
        }
        adaptations
    }

    fn stabilization_phase(profile: &TraumaProfile, library: &ExerciseLibrary) -> Phase {
        let mut exercises = Vec::new();
        if let Some(safety) =
            library.region_exercise_named(BrainRegion::Amygdala, "Safety Signal Training")
        {
            exercises.push(
                safety
                    .clone()
                    .with_priority(ExercisePriority::High)
                    .with_adaptations(Self::stabilization_adaptations(profile)),
            );
        }
        exercises.extend(library.stabilization_core().iter().cloned());

        Phase {
            name: PhaseName::Stabilization,
            duration: WeekRange::new(2, 3),
            open_ended: false,
            goals: vec![
                "Establish sense of safety".to_string(),
                "Build coping resources".to_string(),
                "Regulate nervous system".to_string(),
            ],
            exercises,
            target_regions: vec![
                BrainRegion::Amygdala,
                BrainRegion::Brainstem,
                BrainRegion::PrefrontalCortex,
            ],
        }
    }

    fn processing_phase(
        significant: &[BrainRegion],
        profile: &TraumaProfile,
        library: &ExerciseLibrary,
    ) -> Phase {
        let mut exercises = Vec::new();
        for region in significant.iter().take(PROCESSING_REGION_COUNT) {
            for template in library.region_exercises(*region) {
                if matches!(
                    template.kind,
                    ExerciseKind::Integration | ExerciseKind::Desensitization
                ) {
                    let mut exercise = template.clone();
                    if profile.has_primary("abandonment") {
                        exercise.adaptations.push(Adaptation::new(
                            AdaptationKind::SupportPerson,
                            "Practice with trusted support person present",
                        ));
                    }
                    exercises.push(exercise);
                }
            }
        }
        exercises.extend(library.processing_core().iter().cloned());

        Phase {
            name: PhaseName::Processing,
            duration: WeekRange::new(4, 6),
            open_ended: false,
            goals: vec![
                "Process traumatic memories safely".to_string(),
                "Reduce emotional charge".to_string(),
                "Integrate experiences".to_string(),
            ],
            exercises,
            target_regions: significant.to_vec(),
        }
    }

    fn integration_phase(impacts: &RegionImpacts, library: &ExerciseLibrary) -> Phase {
        let mut exercises: Vec<Exercise> = library.integration_core().to_vec();
        if impacts.contains(BrainRegion::CorpusCallosum) {
            exercises.push(library.integration_bilateral().clone());
        }

        Phase {
            name: PhaseName::Integration,
            duration: WeekRange::new(4, 5),
            open_ended: false,
            goals: vec![
                "Integrate new neural patterns".to_string(),
                "Rebuild healthy connections".to_string(),
                "Strengthen resilience".to_string(),
            ],
            exercises,
            target_regions: vec![
                BrainRegion::PrefrontalCortex,
                BrainRegion::Hippocampus,
                BrainRegion::CorpusCallosum,
            ],
        }
    }

    fn growth_phase(library: &ExerciseLibrary) -> Phase {
        Phase {
            name: PhaseName::Growth,
            duration: WeekRange::new(2, 3),
            open_ended: true,
            goals: vec![
                "Cultivate post-traumatic growth".to_string(),
                "Build future resilience".to_string(),
                "Create meaning from experience".to_string(),
            ],
            exercises: library.growth_core().to_vec(),
            target_regions: vec![BrainRegion::WholeBrain, BrainRegion::DefaultModeNetwork],
        }
    }

    fn custom_exercises(
        impacts: &RegionImpacts,
        library: &ExerciseLibrary,
    ) -> Vec<CustomExercise> {
        library
            .custom_rules()
            .iter()
            .filter(|rule| impacts.total_for(rule.region).abs() >= rule.threshold)
            .map(|rule| rule.template.clone())
            .collect()
    }

    fn milestones(phases: &[Phase]) -> Vec<Milestone> {
        let rewards = [
            Reward::new(RewardKind::Visualization, "brain_healing_animation"),
            Reward::new(RewardKind::Achievement, "trauma_warrior_badge"),
            Reward::new(RewardKind::Unlock, "advanced_exercises"),
            Reward::new(RewardKind::Certificate, "growth_certification"),
        ];

        let mut milestones = Vec::new();
        let mut week_counter = 0u32;

        for (index, phase) in phases.iter().enumerate() {
            let phase_weeks = phase.duration.max_weeks;
            week_counter += phase_weeks;

            let brain_changes: BTreeMap<BrainRegion, _> = phase
                .target_regions
                .iter()
                .map(|region| (*region, NeuroplasticityModel::predict(*region, phase_weeks)))
                .collect();

            milestones.push(Milestone {
                week: week_counter,
                title: format!("Complete {} Phase", phase.name.label()),
                description: format!("Finish all core exercises in {}", phase.name.label()),
                reward: rewards[index.min(rewards.len() - 1)].clone(),
                brain_changes: Some(brain_changes),
            });

            if phase_weeks > 3 {
                milestones.push(Milestone {
                    week: week_counter - phase_weeks / 2,
                    title: format!("{} Halfway Point", phase.name.label()),
                    description: "Celebrate your progress and adjust exercises as needed"
                        .to_string(),
                    reward: Reward::new(RewardKind::Reflection, "progress_visualization"),
                    brain_changes: None,
                });
            }
        }

        milestones
    }

    fn total_duration(phases: &[Phase]) -> WeekRange {
        WeekRange::new(
            phases.iter().map(|p| p.duration.min_weeks).sum(),
            phases.iter().map(|p| p.duration.max_weeks).sum(),
        )
    }
}
