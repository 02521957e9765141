//! Progress events and per-event records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::{ExerciseId, PathwayId, Timestamp};

/// One exercise-completion log entry.
///
/// Events form an append-only log owned by the caller; the tracker is a
/// pure reducer over the ordered sequence. Mood and difficulty are
/// 1-10 self-ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub pathway: PathwayId,
    pub exercise: ExerciseId,
    pub timestamp: Timestamp,
    pub completed: bool,
    #[serde(default)]
    pub mood: Option<u8>,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub insights: Option<String>,
}

impl ProgressEvent {
    /// Creates a completed-exercise event with no self-ratings.
    pub fn completed(pathway: PathwayId, exercise: ExerciseId, timestamp: Timestamp) -> Self {
        Self {
            pathway,
            exercise,
            timestamp,
            completed: true,
            mood: None,
            difficulty: None,
            insights: None,
        }
    }

    /// Creates a skipped-exercise event.
    pub fn skipped(pathway: PathwayId, exercise: ExerciseId, timestamp: Timestamp) -> Self {
        Self {
            completed: false,
            ..Self::completed(pathway, exercise, timestamp)
        }
    }

    /// Attaches a mood self-rating.
    pub fn with_mood(mut self, mood: u8) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Attaches a difficulty self-rating.
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Attaches free-form insights.
    pub fn with_insights(mut self, insights: impl Into<String>) -> Self {
        self.insights = Some(insights.into());
        self
    }
}

/// Immediate adaptation suggested by a single event or a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptiveAction {
    ReduceIntensity,
    IncreaseChallenge,
    CelebrateProgress,
}

/// The tracker's response to a recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub event: ProgressEvent,
    pub recommendation: Option<AdaptiveAction>,
}

/// Event/pathway mismatches surfaced at record time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("Event targets pathway '{actual}' but was recorded against '{expected}'")]
    PathwayMismatch { expected: String, actual: String },

    #[error("Exercise '{exercise}' is not part of the pathway")]
    UnknownExercise { exercise: String },
}
