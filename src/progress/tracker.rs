//! Pure reducer over progress event streams.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AdaptiveAction, ProgressError, ProgressEvent, ProgressRecord};
use crate::foundation::{PathwayId, Timestamp};
use crate::pathway::{HealingPathway, PhaseName};

/// Single-event difficulty above which intensity is reduced immediately.
pub const REDUCE_INTENSITY_DIFFICULTY: u8 = 8;

/// Single-event difficulty below which more challenge is suggested.
pub const INCREASE_CHALLENGE_DIFFICULTY: u8 = 3;

/// Mean difficulty above which the report recommends reducing intensity.
pub const HIGH_MEAN_DIFFICULTY: f64 = 7.0;

/// Difficulty substituted for events without a rating.
pub const DEFAULT_DIFFICULTY: f64 = 5.0;

/// Relative mood improvement that triggers celebratory reinforcement.
pub const MOOD_TREND_THRESHOLD: f64 = 0.2;

/// Consecutive practice days that earn a streak celebration.
pub const STREAK_CELEBRATION_DAYS: u32 = 7;

/// A report-level recommendation with user-facing copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: AdaptiveAction,
    pub message: String,
    pub suggestion: String,
}

/// Kind of celebration surfaced in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationKind {
    Streak,
    PhaseComplete,
}

/// A celebration entry with user-facing copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Celebration {
    pub kind: CelebrationKind,
    pub message: String,
    pub reward: String,
}

/// Completion percentage for one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase: PhaseName,
    pub percent: f64,
}

/// Snapshot report over a pathway's event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub pathway: PathwayId,
    pub generated_at: Timestamp,
    pub overall_progress: f64,
    pub phase_progress: Vec<PhaseProgress>,
    pub streak_days: u32,
    pub predicted_completion: Option<Timestamp>,
    pub recommendations: Vec<Recommendation>,
    pub celebrations: Vec<Celebration>,
}

/// Stateless progress tracking service.
pub struct ProgressTracker;

impl ProgressTracker {
    /// Validates and wraps one event; storage stays with the caller.
    ///
    /// Extreme single-event difficulty ratings produce an immediate
    /// adaptation suggestion.
    pub fn record_event(
        pathway: &HealingPathway,
        event: ProgressEvent,
    ) -> Result<ProgressRecord, ProgressError> {
        if event.pathway != pathway.id {
            return Err(ProgressError::PathwayMismatch {
                expected: pathway.id.to_string(),
                actual: event.pathway.to_string(),
            });
        }
        if !pathway.contains_exercise(&event.exercise) {
            return Err(ProgressError::UnknownExercise {
                exercise: event.exercise.as_str().to_string(),
            });
        }

        let recommendation = event.difficulty.and_then(|d| {
            if d > REDUCE_INTENSITY_DIFFICULTY {
                Some(AdaptiveAction::ReduceIntensity)
            } else if d < INCREASE_CHALLENGE_DIFFICULTY {
                Some(AdaptiveAction::IncreaseChallenge)
            } else {
                None
            }
        });

        Ok(ProgressRecord {
            event,
            recommendation,
        })
    }

    /// Reduces the ordered event log into a progress report.
    ///
    /// `now` is passed explicitly so the reducer stays deterministic;
    /// streaks and the completion projection are computed relative to it.
    pub fn report(
        pathway: &HealingPathway,
        events: &[ProgressEvent],
        now: Timestamp,
    ) -> ProgressReport {
        let overall_progress = Self::overall_progress(events);
        let streak_days = Self::streak_days(events, now);

        let report = ProgressReport {
            pathway: pathway.id,
            generated_at: now,
            overall_progress,
            phase_progress: Self::phase_progress(pathway, events),
            streak_days,
            predicted_completion: Self::predicted_completion(events, overall_progress, now),
            recommendations: Self::recommendations(events),
            celebrations: Self::celebrations(pathway, events, streak_days),
        };

        debug!(
            events = events.len(),
            overall_progress = report.overall_progress,
            streak_days = report.streak_days,
            "progress report generated"
        );
        report
    }

    /// Completed events over total events, as a percentage. Zero for an
    /// empty log (never NaN).
    fn overall_progress(events: &[ProgressEvent]) -> f64 {
        if events.is_empty() {
            return 0.0;
        }
        let completed = events.iter().filter(|e| e.completed).count();
        completed as f64 / events.len() as f64 * 100.0
    }

    /// Distinct completed exercises per phase over the phase's exercise
    /// count. Phases without exercises report zero.
    fn phase_progress(pathway: &HealingPathway, events: &[ProgressEvent]) -> Vec<PhaseProgress> {
        pathway
            .phases
            .iter()
            .map(|phase| {
                let total = phase.exercises.len();
                if total == 0 {
                    return PhaseProgress {
                        phase: phase.name,
                        percent: 0.0,
                    };
                }
                let completed = phase
                    .exercises
                    .iter()
                    .filter(|exercise| {
                        events
                            .iter()
                            .any(|e| e.completed && e.exercise == exercise.id)
                    })
                    .count();
                PhaseProgress {
                    phase: phase.name,
                    percent: completed as f64 / total as f64 * 100.0,
                }
            })
            .collect()
    }

    /// Consecutive practice days ending today, walking the log backward.
    /// Any gap breaks the scan.
    fn streak_days(events: &[ProgressEvent], now: Timestamp) -> u32 {
        let mut streak: u32 = 0;
        for event in events.iter().rev() {
            let days_ago = now.days_since(&event.timestamp);
            if days_ago == i64::from(streak) {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }

    /// Projects the completion date from the observed progress rate.
    ///
    /// Fewer than two events (or zero elapsed time) fall back to a rate
    /// of one percent per day; a non-positive rate yields no projection.
    fn predicted_completion(
        events: &[ProgressEvent],
        overall_progress: f64,
        now: Timestamp,
    ) -> Option<Timestamp> {
        if events.is_empty() {
            return None;
        }

        let rate = if events.len() < 2 {
            1.0
        } else {
            let first = &events[0].timestamp;
            let last = &events[events.len() - 1].timestamp;
            let elapsed_days = last.fractional_days_since(first);
            if elapsed_days <= 0.0 {
                1.0
            } else {
                overall_progress / elapsed_days
            }
        };

        if rate <= 0.0 {
            return None;
        }

        let days_to_completion = (100.0 - overall_progress) / rate;
        Some(now.add_days(days_to_completion.round() as i64))
    }

    fn recommendations(events: &[ProgressEvent]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        if events.is_empty() {
            return recommendations;
        }

        let mean_difficulty = events
            .iter()
            .map(|e| e.difficulty.map_or(DEFAULT_DIFFICULTY, f64::from))
            .sum::<f64>()
            / events.len() as f64;
        if mean_difficulty > HIGH_MEAN_DIFFICULTY {
            recommendations.push(Recommendation {
                action: AdaptiveAction::ReduceIntensity,
                message: "Consider reducing exercise intensity or duration".to_string(),
                suggestion: "Try 50% duration for the next week".to_string(),
            });
        }

        if Self::mood_trend(events) > MOOD_TREND_THRESHOLD {
            recommendations.push(Recommendation {
                action: AdaptiveAction::CelebrateProgress,
                message: "Your mood is consistently improving!".to_string(),
                suggestion: "Add a rewarding activity this week".to_string(),
            });
        }

        recommendations
    }

    /// Relative second-half vs first-half mood improvement. Needs at
    /// least three mood-bearing events; otherwise the trend is zero.
    fn mood_trend(events: &[ProgressEvent]) -> f64 {
        let moods: Vec<f64> = events.iter().filter_map(|e| e.mood.map(f64::from)).collect();
        if moods.len() < 3 {
            return 0.0;
        }

        let half = moods.len() / 2;
        let first_avg = moods[..half].iter().sum::<f64>() / half as f64;
        let second_avg = moods[half..].iter().sum::<f64>() / (moods.len() - half) as f64;
        if first_avg == 0.0 {
            return 0.0;
        }
        (second_avg - first_avg) / first_avg
    }

    fn celebrations(
        pathway: &HealingPathway,
        events: &[ProgressEvent],
        streak_days: u32,
    ) -> Vec<Celebration> {
        let mut celebrations = Vec::new();

        if streak_days >= STREAK_CELEBRATION_DAYS {
            celebrations.push(Celebration {
                kind: CelebrationKind::Streak,
                message: format!(
                    "{} day streak! You're building strong habits.",
                    streak_days
                ),
                reward: "streak_badge".to_string(),
            });
        }

        for phase in &pathway.phases {
            let all_done = !phase.exercises.is_empty()
                && phase.exercises.iter().all(|exercise| {
                    events
                        .iter()
                        .any(|e| e.completed && e.exercise == exercise.id)
                });
            if all_done {
                celebrations.push(Celebration {
                    kind: CelebrationKind::PhaseComplete,
                    message: format!("You completed the {} phase!", phase.name.label()),
                    reward: "phase_certificate".to_string(),
                });
            }
        }

        celebrations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RegionImpacts;
    use crate::foundation::ExerciseId;
    use crate::pathway::{
        ExerciseLibrary, PathwayGenerator, PathwayPreferences, TraumaProfile,
    };

    fn pathway() -> HealingPathway {
        PathwayGenerator::generate(
            &RegionImpacts::new(),
            &TraumaProfile::empty(),
            &PathwayPreferences::default(),
            ExerciseLibrary::bundled(),
        )
    }

    fn exercise(slug: &str) -> ExerciseId {
        ExerciseId::new(slug).unwrap()
    }

    fn day(n: u64) -> Timestamp {
        Timestamp::from_unix_secs(n * 86_400)
    }

    fn event(pathway: &HealingPathway, slug: &str, at: Timestamp, completed: bool) -> ProgressEvent {
        if completed {
            ProgressEvent::completed(pathway.id, exercise(slug), at)
        } else {
            ProgressEvent::skipped(pathway.id, exercise(slug), at)
        }
    }

    // ───────────────────────────────────────────────────────────────
    // record_event
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn record_event_accepts_known_exercise() {
        let pathway = pathway();
        let record = ProgressTracker::record_event(
            &pathway,
            event(&pathway, "safety_signal_training", day(0), true),
        )
        .unwrap();
        assert!(record.recommendation.is_none());
    }

    #[test]
    fn record_event_rejects_foreign_pathway() {
        let pathway = pathway();
        let other = self::pathway();
        let mut event = event(&pathway, "safety_signal_training", day(0), true);
        event.pathway = other.id;

        let err = ProgressTracker::record_event(&pathway, event).unwrap_err();
        assert!(matches!(err, ProgressError::PathwayMismatch { .. }));
    }

    #[test]
    fn record_event_rejects_unknown_exercise() {
        let pathway = pathway();
        let event = event(&pathway, "underwater_basket_weaving", day(0), true);
        let err = ProgressTracker::record_event(&pathway, event).unwrap_err();
        assert!(matches!(err, ProgressError::UnknownExercise { .. }));
    }

    #[test]
    fn extreme_difficulty_triggers_immediate_adaptation() {
        let pathway = pathway();

        let hard = event(&pathway, "safety_signal_training", day(0), true).with_difficulty(9);
        let record = ProgressTracker::record_event(&pathway, hard).unwrap();
        assert_eq!(record.recommendation, Some(AdaptiveAction::ReduceIntensity));

        let easy = event(&pathway, "safety_signal_training", day(0), true).with_difficulty(2);
        let record = ProgressTracker::record_event(&pathway, easy).unwrap();
        assert_eq!(
            record.recommendation,
            Some(AdaptiveAction::IncreaseChallenge)
        );

        let middling =
            event(&pathway, "safety_signal_training", day(0), true).with_difficulty(5);
        let record = ProgressTracker::record_event(&pathway, middling).unwrap();
        assert!(record.recommendation.is_none());
    }

    // ───────────────────────────────────────────────────────────────
    // Overall and phase progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_log_reports_zero_progress() {
        let pathway = pathway();
        let report = ProgressTracker::report(&pathway, &[], day(10));
        assert_eq!(report.overall_progress, 0.0);
        assert_eq!(report.streak_days, 0);
        assert!(report.predicted_completion.is_none());
        assert!(report.recommendations.is_empty());
        assert!(report.celebrations.is_empty());
    }

    #[test]
    fn overall_progress_is_completed_over_total_events() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), true),
            event(&pathway, "window_of_tolerance_expansion", day(1), true),
            event(&pathway, "five_senses_grounding", day(2), false),
            event(&pathway, "narrative_exposure_therapy", day(3), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(3));
        assert!((report.overall_progress - 75.0).abs() < 1e-9);
    }

    #[test]
    fn phase_progress_counts_distinct_exercises() {
        let pathway = pathway();
        // Stabilization has 3 exercises; complete one of them twice.
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), true),
            event(&pathway, "safety_signal_training", day(1), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(1));
        let stabilization = &report.phase_progress[0];
        assert_eq!(stabilization.phase, PhaseName::Stabilization);
        assert!((stabilization.percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn completing_a_phase_earns_a_celebration() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), true),
            event(&pathway, "window_of_tolerance_expansion", day(0), true),
            event(&pathway, "five_senses_grounding", day(0), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(0));

        assert!((report.phase_progress[0].percent - 100.0).abs() < 1e-9);
        let phase_celebrations: Vec<_> = report
            .celebrations
            .iter()
            .filter(|c| c.kind == CelebrationKind::PhaseComplete)
            .collect();
        assert_eq!(phase_celebrations.len(), 1);
        assert!(phase_celebrations[0]
            .message
            .contains("Stabilization & Safety"));
    }

    // ───────────────────────────────────────────────────────────────
    // Recommendations
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn high_mean_difficulty_recommends_reducing_intensity() {
        let pathway = pathway();
        let events: Vec<ProgressEvent> = [9, 8, 9, 7, 8]
            .iter()
            .enumerate()
            .map(|(i, d)| {
                event(&pathway, "safety_signal_training", day(i as u64), true)
                    .with_difficulty(*d)
            })
            .collect();

        let report = ProgressTracker::report(&pathway, &events, day(4));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.action == AdaptiveAction::ReduceIntensity));
    }

    #[test]
    fn unrated_events_count_as_default_difficulty() {
        let pathway = pathway();
        // One 10 and two unrated (5 each): mean 20/3 < 7, no recommendation.
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), true).with_difficulty(10),
            event(&pathway, "safety_signal_training", day(1), true),
            event(&pathway, "safety_signal_training", day(2), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(2));
        assert!(report
            .recommendations
            .iter()
            .all(|r| r.action != AdaptiveAction::ReduceIntensity));
    }

    #[test]
    fn rising_mood_earns_celebratory_recommendation() {
        let pathway = pathway();
        let events: Vec<ProgressEvent> = [4, 4, 6, 6]
            .iter()
            .enumerate()
            .map(|(i, m)| {
                event(&pathway, "safety_signal_training", day(i as u64), true).with_mood(*m)
            })
            .collect();

        let report = ProgressTracker::report(&pathway, &events, day(3));
        // (6 - 4) / 4 = 0.5 > 0.2
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.action == AdaptiveAction::CelebrateProgress));
    }

    #[test]
    fn mood_trend_needs_three_rated_events() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), true).with_mood(2),
            event(&pathway, "safety_signal_training", day(1), true).with_mood(9),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(1));
        assert!(report
            .recommendations
            .iter()
            .all(|r| r.action != AdaptiveAction::CelebrateProgress));
    }

    #[test]
    fn flat_mood_earns_no_celebration() {
        let pathway = pathway();
        let events: Vec<ProgressEvent> = [6, 6, 6, 6]
            .iter()
            .enumerate()
            .map(|(i, m)| {
                event(&pathway, "safety_signal_training", day(i as u64), true).with_mood(*m)
            })
            .collect();
        let report = ProgressTracker::report(&pathway, &events, day(3));
        assert!(report
            .recommendations
            .iter()
            .all(|r| r.action != AdaptiveAction::CelebrateProgress));
    }

    // ───────────────────────────────────────────────────────────────
    // Streaks
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn consecutive_days_build_a_streak() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(8), true),
            event(&pathway, "safety_signal_training", day(9), true),
            event(&pathway, "safety_signal_training", day(10), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(10));
        assert_eq!(report.streak_days, 3);
    }

    #[test]
    fn a_gap_breaks_the_streak() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(6), true),
            // Day 7 missed.
            event(&pathway, "safety_signal_training", day(8), true),
            event(&pathway, "safety_signal_training", day(9), true),
            event(&pathway, "safety_signal_training", day(10), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(10));
        assert_eq!(report.streak_days, 3);
    }

    #[test]
    fn practice_not_ending_today_has_no_streak() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(4), true),
            event(&pathway, "safety_signal_training", day(5), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(10));
        assert_eq!(report.streak_days, 0);
    }

    #[test]
    fn week_long_streak_earns_celebration() {
        let pathway = pathway();
        let events: Vec<ProgressEvent> = (0..7)
            .map(|i| event(&pathway, "safety_signal_training", day(10 + i), true))
            .collect();
        let report = ProgressTracker::report(&pathway, &events, day(16));

        assert_eq!(report.streak_days, 7);
        let streaks: Vec<_> = report
            .celebrations
            .iter()
            .filter(|c| c.kind == CelebrationKind::Streak)
            .collect();
        assert_eq!(streaks.len(), 1);
        assert!(streaks[0].message.starts_with("7 day streak"));
    }

    // ───────────────────────────────────────────────────────────────
    // Completion projection
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn projection_extends_observed_rate() {
        let pathway = pathway();
        // 2 of 4 events completed over 4 days: 50% at 12.5%/day,
        // 50 remaining -> 4 days out.
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), true),
            event(&pathway, "window_of_tolerance_expansion", day(1), false),
            event(&pathway, "five_senses_grounding", day(2), false),
            event(&pathway, "narrative_exposure_therapy", day(4), true),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(4));
        assert_eq!(report.predicted_completion, Some(day(8)));
    }

    #[test]
    fn single_event_uses_unit_rate() {
        let pathway = pathway();
        let events = vec![event(&pathway, "safety_signal_training", day(0), true)];
        let report = ProgressTracker::report(&pathway, &events, day(0));
        // 100% complete already: zero days out.
        assert_eq!(report.predicted_completion, Some(day(0)));
    }

    #[test]
    fn same_day_events_fall_back_to_unit_rate() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(3), true),
            event(&pathway, "window_of_tolerance_expansion", day(3), false),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(3));
        // 50% remaining at 1%/day.
        assert_eq!(report.predicted_completion, Some(day(53)));
    }

    #[test]
    fn zero_completions_yield_no_projection() {
        let pathway = pathway();
        let events = vec![
            event(&pathway, "safety_signal_training", day(0), false),
            event(&pathway, "window_of_tolerance_expansion", day(2), false),
        ];
        let report = ProgressTracker::report(&pathway, &events, day(2));
        assert!(report.predicted_completion.is_none());
    }
}
