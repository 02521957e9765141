//! Trauma profile summary and exercise adaptations.

use serde::{Deserialize, Serialize};

use crate::foundation::TraumaId;

/// Broad developmental stage hint for adaptation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentalStage {
    EarlyChildhood,
    MiddleChildhood,
    Adolescence,
}

/// Free-form summary of the assessment the generator adapts to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraumaProfile {
    #[serde(default)]
    pub primary_traumas: Vec<TraumaId>,
    #[serde(default)]
    pub developmental_stage: Option<DevelopmentalStage>,
}

impl TraumaProfile {
    /// An empty profile (no adaptation hints).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the given trauma id is among the primary traumas.
    pub fn has_primary(&self, id: &str) -> bool {
        self.primary_traumas.iter().any(|t| t.as_str() == id)
    }
}

/// How an exercise is modified for a specific profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationKind {
    BodySafety,
    PlayBased,
    SupportPerson,
}

/// One adaptation attached to an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adaptation {
    pub kind: AdaptationKind,
    pub modification: String,
}

impl Adaptation {
    /// Creates an adaptation.
    pub fn new(kind: AdaptationKind, modification: impl Into<String>) -> Self {
        Self {
            kind,
            modification: modification.into(),
        }
    }
}
