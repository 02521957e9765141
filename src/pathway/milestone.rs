//! Milestones marking progress through a pathway.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::BrainChangeEstimate;
use crate::foundation::BrainRegion;

/// Kind of reward attached to a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Visualization,
    Achievement,
    Unlock,
    Certificate,
    Reflection,
}

/// Reward granted when a milestone is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub value: String,
}

impl Reward {
    /// Creates a reward.
    pub fn new(kind: RewardKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// One milestone at a cumulative week offset into the plan.
///
/// Phase-completion milestones carry predicted brain changes for the
/// phase's target regions; halfway milestones carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u32,
    pub title: String,
    pub description: String,
    pub reward: Reward,
    #[serde(default)]
    pub brain_changes: Option<BTreeMap<BrainRegion, BrainChangeEstimate>>,
}
