//! Per-region impact accumulation with full provenance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::AgeCode;
use crate::foundation::{BrainRegion, TraumaId};

/// One weighted contribution to a region's total impact.
///
/// A trauma reported across several age windows produces one source record
/// per window; the age fields let downstream pattern rules see which
/// developmental period a contribution fell in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSource {
    pub trauma: TraumaId,
    pub contributed_impact: f64,
    pub citation: String,
    pub age: Option<AgeCode>,
    pub age_multiplier: f64,
}

/// Accumulated impact on a single brain region.
///
/// Invariant: `total_impact` equals the sum of the sources' contributions
/// within floating-point tolerance. Negative totals mean volume/activity
/// reduction, positive totals mean hyperactivation or enlargement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionImpact {
    pub region: BrainRegion,
    pub total_impact: f64,
    pub sources: Vec<ImpactSource>,
}

impl RegionImpact {
    /// Returns true when the net impact is a reduction.
    pub fn is_reduction(&self) -> bool {
        self.total_impact < 0.0
    }

    /// Returns true when the net impact is hyperactivation/enlargement.
    pub fn is_hyperactivation(&self) -> bool {
        self.total_impact > 0.0
    }

    /// Sums the source contributions (for invariant checks).
    pub fn source_sum(&self) -> f64 {
        self.sources.iter().map(|s| s.contributed_impact).sum()
    }
}

/// The aggregator's output: impact per affected region.
///
/// Backed by an ordered map so iteration and serialization are
/// deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionImpacts {
    map: BTreeMap<BrainRegion, RegionImpact>,
}

impl RegionImpacts {
    /// Creates an empty impact map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source contribution to a region, creating the entry on first
    /// touch.
    pub(crate) fn accumulate(&mut self, region: BrainRegion, source: ImpactSource) {
        let entry = self.map.entry(region).or_insert_with(|| RegionImpact {
            region,
            total_impact: 0.0,
            sources: Vec::new(),
        });
        entry.total_impact += source.contributed_impact;
        entry.sources.push(source);
    }

    /// Scales every total and every source contribution by `factor`,
    /// preserving the source-sum invariant.
    pub(crate) fn scale(&mut self, factor: f64) {
        for impact in self.map.values_mut() {
            impact.total_impact *= factor;
            for source in &mut impact.sources {
                source.contributed_impact *= factor;
            }
        }
    }

    /// Returns the impact entry for a region, if present.
    pub fn get(&self, region: BrainRegion) -> Option<&RegionImpact> {
        self.map.get(&region)
    }

    /// Returns a region's total impact, or 0.0 when absent.
    pub fn total_for(&self, region: BrainRegion) -> f64 {
        self.map.get(&region).map_or(0.0, |i| i.total_impact)
    }

    /// Returns true if the region appears in the map.
    pub fn contains(&self, region: BrainRegion) -> bool {
        self.map.contains_key(&region)
    }

    /// Iterates impacts in canonical region order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionImpact> {
        self.map.values()
    }

    /// Returns the number of affected regions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true when no region was affected.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
