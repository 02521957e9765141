//! Questionnaire response input model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{AgeCode, DurationCode};
use crate::foundation::TraumaId;

/// Answer to a single questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    Unsure,
}

/// One trauma's answer with its follow-up data.
///
/// Age codes and duration are meaningful only for `Yes` answers to
/// non-protective items; the aggregator rejects them anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraumaAnswer {
    pub answered: Answer,
    #[serde(default)]
    pub age_codes: Vec<AgeCode>,
    #[serde(default)]
    pub duration: Option<DurationCode>,
}

impl TraumaAnswer {
    /// A bare yes answer with no follow-up data.
    pub fn yes() -> Self {
        Self {
            answered: Answer::Yes,
            age_codes: Vec::new(),
            duration: None,
        }
    }

    /// A no answer.
    pub fn no() -> Self {
        Self {
            answered: Answer::No,
            age_codes: Vec::new(),
            duration: None,
        }
    }

    /// An unsure / prefer-not-to-answer response.
    pub fn unsure() -> Self {
        Self {
            answered: Answer::Unsure,
            age_codes: Vec::new(),
            duration: None,
        }
    }

    /// Attaches the age windows this trauma was experienced in.
    pub fn with_age_codes(mut self, codes: Vec<AgeCode>) -> Self {
        self.age_codes = codes;
        self
    }

    /// Attaches the exposure duration.
    pub fn with_duration(mut self, code: DurationCode) -> Self {
        self.duration = Some(code);
        self
    }
}

/// The complete set of answers for one questionnaire submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserResponseSet {
    answers: BTreeMap<TraumaId, TraumaAnswer>,
}

impl UserResponseSet {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for a trauma, replacing any previous answer.
    pub fn record(&mut self, trauma: TraumaId, answer: TraumaAnswer) {
        self.answers.insert(trauma, answer);
    }

    /// Returns the answer recorded for a trauma, if any.
    pub fn answer(&self, trauma: &TraumaId) -> Option<&TraumaAnswer> {
        self.answers.get(trauma)
    }

    /// Iterates over all recorded answers.
    pub fn iter(&self) -> impl Iterator<Item = (&TraumaId, &TraumaAnswer)> {
        self.answers.iter()
    }

    /// Returns the number of recorded answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no answers are recorded.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
