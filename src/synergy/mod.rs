//! Synergy module - Derived interaction effects.
//!
//! Consumes the finished region-impact map and produces higher-order
//! interaction findings from a fixed table of pattern rules, tiered by
//! evidentiary strength. Pure and infallible: missing regions mean a rule
//! does not fire, never an error.

mod calculator;
mod effect;

pub use calculator::{SynergyCalculator, EARLY_WINDOW_MULTIPLIER};
pub use effect::{ConfidenceTier, ImbalanceLevel, SynergyEffect, SynergyMeasure};
