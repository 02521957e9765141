//! Pattern-detection rules over the finished impact map.
//!
//! Each rule independently tests its prerequisite regions and signs; a
//! missing region reads as zero and the rule simply does not fire. The
//! calculator never mutates its input and never errors.

use tracing::debug;

use super::{ConfidenceTier, ImbalanceLevel, SynergyEffect, SynergyMeasure};
use crate::assessment::RegionImpacts;
use crate::foundation::BrainRegion;

/// Age multiplier at or above which a source counts as an early
/// developmental window (the two earliest catalog ranges, since earlier
/// ages carry strictly larger multipliers).
pub const EARLY_WINDOW_MULTIPLIER: f64 = 2.0;

/// Regions with disproportionate influence on global connectivity.
const HUB_REGIONS: [BrainRegion; 4] = [
    BrainRegion::PrefrontalCortex,
    BrainRegion::Thalamus,
    BrainRegion::Hippocampus,
    BrainRegion::Amygdala,
];

/// Local processing clusters for the small-world rule.
const LOCAL_CLUSTERS: [&[BrainRegion]; 4] = [
    &[BrainRegion::VisualCortex],
    &[BrainRegion::SensoryCortex, BrainRegion::Insula],
    &[BrainRegion::Hippocampus, BrainRegion::TemporalLobe],
    &[BrainRegion::PrefrontalCortex, BrainRegion::AnteriorCingulate],
];

/// Stateless synergy/cascade detection service.
pub struct SynergyCalculator;

impl SynergyCalculator {
    /// Computes all derived interaction effects for an impact map.
    ///
    /// Output is sorted by confidence tier (Direct, Convergent, Emergent)
    /// with detection order preserved within a tier.
    pub fn compute(impacts: &RegionImpacts) -> Vec<SynergyEffect> {
        let mut effects = Vec::new();

        Self::detect_executive_limbic_imbalance(impacts, &mut effects);
        Self::detect_memory_fragmentation(impacts, &mut effects);
        Self::detect_sensory_gating_deficit(impacts, &mut effects);
        Self::detect_network_disconnection(impacts, &mut effects);
        Self::detect_hub_disruption(impacts, &mut effects);
        Self::detect_developmental_cascade(impacts, &mut effects);
        Self::detect_small_world_disruption(impacts, &mut effects);

        // Stable sort keeps detection order within each tier.
        effects.sort_by_key(|e| e.tier);

        debug!(effects = effects.len(), "synergy detection complete");
        effects
    }

    fn present(impacts: &RegionImpacts, candidates: &[BrainRegion]) -> Vec<BrainRegion> {
        candidates
            .iter()
            .copied()
            .filter(|r| impacts.contains(*r))
            .collect()
    }

    fn detect_executive_limbic_imbalance(
        impacts: &RegionImpacts,
        effects: &mut Vec<SynergyEffect>,
    ) {
        let executive_group = [
            BrainRegion::PrefrontalCortex,
            BrainRegion::MedialPrefrontalCortex,
            BrainRegion::OrbitofrontalCortex,
        ];
        let limbic_group = [BrainRegion::Amygdala, BrainRegion::LimbicSystem];

        let executive_sum: f64 = executive_group
            .iter()
            .map(|r| impacts.total_for(*r))
            .sum();
        let limbic_sum: f64 = limbic_group.iter().map(|r| impacts.total_for(*r)).sum();

        if executive_sum < 0.0 && limbic_sum > 0.0 {
            let ratio = limbic_sum / executive_sum.abs();
            let mut regions = Self::present(impacts, &executive_group);
            regions.extend(Self::present(impacts, &limbic_group));
            effects.push(SynergyEffect {
                pattern: "Executive-Limbic Imbalance".to_string(),
                regions,
                tier: ConfidenceTier::Direct,
                measure: SynergyMeasure::Ratio {
                    value: ratio,
                    level: ImbalanceLevel::from_ratio(ratio),
                },
                basis: "Top-down control deficit proportional to bottom-up hyperactivation"
                    .to_string(),
            });
        }
    }

    fn detect_memory_fragmentation(impacts: &RegionImpacts, effects: &mut Vec<SynergyEffect>) {
        let memory = impacts.total_for(BrainRegion::Hippocampus);
        let context = impacts.total_for(BrainRegion::TemporalLobe)
            + impacts.total_for(BrainRegion::DefaultModeNetwork);

        if memory < 0.0 && context != 0.0 {
            effects.push(SynergyEffect {
                pattern: "Contextual Memory Fragmentation".to_string(),
                regions: Self::present(
                    impacts,
                    &[
                        BrainRegion::Hippocampus,
                        BrainRegion::TemporalLobe,
                        BrainRegion::DefaultModeNetwork,
                    ],
                ),
                tier: ConfidenceTier::Direct,
                measure: SynergyMeasure::Severity {
                    value: (memory * context).abs() / 100.0,
                },
                basis: "Memory encoding requires intact temporal-hippocampal circuits"
                    .to_string(),
            });
        }
    }

    fn detect_sensory_gating_deficit(
        impacts: &RegionImpacts,
        effects: &mut Vec<SynergyEffect>,
    ) {
        let sensory = impacts.total_for(BrainRegion::SensoryCortex)
            + impacts.total_for(BrainRegion::VisualCortex);
        let inhibitory = impacts.total_for(BrainRegion::PrefrontalCortex);

        if sensory != 0.0 && inhibitory < 0.0 {
            effects.push(SynergyEffect {
                pattern: "Sensory Gating Deficit".to_string(),
                regions: Self::present(
                    impacts,
                    &[
                        BrainRegion::SensoryCortex,
                        BrainRegion::VisualCortex,
                        BrainRegion::PrefrontalCortex,
                    ],
                ),
                tier: ConfidenceTier::Convergent,
                measure: SynergyMeasure::Magnitude {
                    value: sensory.abs() * (1.0 + inhibitory.abs() / 100.0),
                },
                basis: "Loss of cortical filtering of sensory input".to_string(),
            });
        }
    }

    fn detect_network_disconnection(
        impacts: &RegionImpacts,
        effects: &mut Vec<SynergyEffect>,
    ) {
        let white = impacts.total_for(BrainRegion::CorpusCallosum)
            + impacts.total_for(BrainRegion::WhiteMatter);
        let nodes = impacts
            .iter()
            .filter(|i| i.region.is_cortical() || i.region.is_network())
            .count();

        if white < 0.0 && nodes > 3 {
            let mut regions = Self::present(
                impacts,
                &[BrainRegion::CorpusCallosum, BrainRegion::WhiteMatter],
            );
            regions.extend(
                impacts
                    .iter()
                    .filter(|i| i.region.is_cortical() || i.region.is_network())
                    .map(|i| i.region),
            );
            effects.push(SynergyEffect {
                pattern: "Network Disconnection Syndrome".to_string(),
                regions,
                tier: ConfidenceTier::Convergent,
                measure: SynergyMeasure::Magnitude {
                    value: white.abs() * (nodes as f64).sqrt(),
                },
                basis: "Structural connectivity loss amplifies functional disruption"
                    .to_string(),
            });
        }
    }

    fn detect_hub_disruption(impacts: &RegionImpacts, effects: &mut Vec<SynergyEffect>) {
        let affected = Self::present(impacts, &HUB_REGIONS);

        if affected.len() >= 2 {
            effects.push(SynergyEffect {
                pattern: "Hub Disruption".to_string(),
                tier: ConfidenceTier::Convergent,
                measure: SynergyMeasure::HubLoad {
                    affected: affected.len(),
                    total: HUB_REGIONS.len(),
                },
                regions: affected,
                basis: "Hub regions have disproportionate influence on global connectivity"
                    .to_string(),
            });
        }
    }

    fn detect_developmental_cascade(
        impacts: &RegionImpacts,
        effects: &mut Vec<SynergyEffect>,
    ) {
        let early_regions: Vec<BrainRegion> = impacts
            .iter()
            .filter(|i| {
                i.sources
                    .iter()
                    .any(|s| s.age_multiplier >= EARLY_WINDOW_MULTIPLIER)
            })
            .map(|i| i.region)
            .collect();

        if early_regions.len() > 3 {
            let count = early_regions.len();
            effects.push(SynergyEffect {
                pattern: "Developmental Cascade".to_string(),
                regions: early_regions,
                tier: ConfidenceTier::Emergent,
                measure: SynergyMeasure::Amplification {
                    affected_systems: count,
                    value: count as f64 * 0.5,
                },
                basis: "Early alterations create sensitization to later stress".to_string(),
            });
        }
    }

    fn detect_small_world_disruption(
        impacts: &RegionImpacts,
        effects: &mut Vec<SynergyEffect>,
    ) {
        let disrupted: Vec<&[BrainRegion]> = LOCAL_CLUSTERS
            .iter()
            .filter(|cluster| cluster.iter().any(|r| impacts.total_for(*r) != 0.0))
            .copied()
            .collect();

        if disrupted.len() > 2 {
            let regions: Vec<BrainRegion> = disrupted
                .iter()
                .flat_map(|cluster| cluster.iter().copied())
                .filter(|r| impacts.contains(*r))
                .collect();
            effects.push(SynergyEffect {
                pattern: "Small-World Disruption".to_string(),
                regions,
                tier: ConfidenceTier::Emergent,
                measure: SynergyMeasure::ClustersDisrupted {
                    count: disrupted.len(),
                },
                basis: "Brain networks optimize local specialization with global integration"
                    .to_string(),
            });
        }
    }
}
