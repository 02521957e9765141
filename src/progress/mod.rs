//! Progress module - Adaptive tracking over exercise-completion events.
//!
//! The tracker owns no state: `record_event` validates and wraps one
//! event, and `report` is a pure reducer over the caller's append-only
//! event log, producing completion percentages, adaptive recommendations,
//! streaks, and a completion-date projection.

mod event;
mod tracker;

pub use event::{AdaptiveAction, ProgressError, ProgressEvent, ProgressRecord};
pub use tracker::{
    Celebration, CelebrationKind, PhaseProgress, ProgressReport, ProgressTracker,
    Recommendation, DEFAULT_DIFFICULTY, HIGH_MEAN_DIFFICULTY, INCREASE_CHALLENGE_DIFFICULTY,
    MOOD_TREND_THRESHOLD, REDUCE_INTENSITY_DIFFICULTY, STREAK_CELEBRATION_DAYS,
};
