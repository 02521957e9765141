//! Healing Compass - Trauma Impact & Healing Pathway Engine
//!
//! This crate turns a structured self-report of adverse childhood
//! experiences into per-region brain impact scores, derived synergy
//! effects, and a personalized four-phase healing pathway with adaptive
//! progress tracking.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, regions, errors)
//! - `catalog` - Immutable trauma reference data (region effects, age/duration scales)
//! - `assessment` - Impact aggregation and severity synthesis
//! - `synergy` - Derived interaction effects over the finished impact map
//! - `pathway` - Four-phase healing pathway generation
//! - `progress` - Pure reducer over exercise-completion events
//!
//! # Design Philosophy
//!
//! Every engine function is a deterministic pure transform of immutable
//! inputs to new outputs. Reference data (the trauma catalog, the exercise
//! library) is explicitly constructed and passed in as a parameter, never
//! consulted as a hidden singleton. The only mutable state in the whole
//! pipeline is the append-only progress event log, and that is owned by
//! the caller.

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod pathway;
pub mod progress;
pub mod synergy;
