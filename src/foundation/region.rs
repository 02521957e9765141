//! Canonical brain region identifiers with alias resolution.
//!
//! Region names arrive from reference data and research tables in many
//! spellings ("Anterior Cingulate Cortex", "ACC", "Somatosensory Cortex").
//! All of them resolve to one closed enumeration at ingestion, so every
//! downstream lookup is an exact match and a silent miss is impossible.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier for a brain region or functional system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrainRegion {
    PrefrontalCortex,
    MedialPrefrontalCortex,
    OrbitofrontalCortex,
    AnteriorCingulate,
    Amygdala,
    Hippocampus,
    Thalamus,
    Insula,
    Brainstem,
    CorpusCallosum,
    SensoryCortex,
    VisualCortex,
    TemporalLobe,
    Cerebellum,
    LimbicSystem,
    WhiteMatter,
    ExecutiveNetwork,
    PrefrontalLimbicConnectivity,
    DefaultModeNetwork,
    WholeBrain,
}

impl BrainRegion {
    /// All canonical regions, in canonical order.
    pub fn all() -> &'static [BrainRegion] {
        use BrainRegion::*;
        &[
            PrefrontalCortex,
            MedialPrefrontalCortex,
            OrbitofrontalCortex,
            AnteriorCingulate,
            Amygdala,
            Hippocampus,
            Thalamus,
            Insula,
            Brainstem,
            CorpusCallosum,
            SensoryCortex,
            VisualCortex,
            TemporalLobe,
            Cerebellum,
            LimbicSystem,
            WhiteMatter,
            ExecutiveNetwork,
            PrefrontalLimbicConnectivity,
            DefaultModeNetwork,
            WholeBrain,
        ]
    }

    /// Returns the canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            BrainRegion::PrefrontalCortex => "Prefrontal Cortex",
            BrainRegion::MedialPrefrontalCortex => "Medial Prefrontal Cortex",
            BrainRegion::OrbitofrontalCortex => "Orbitofrontal Cortex",
            BrainRegion::AnteriorCingulate => "Anterior Cingulate",
            BrainRegion::Amygdala => "Amygdala",
            BrainRegion::Hippocampus => "Hippocampus",
            BrainRegion::Thalamus => "Thalamus",
            BrainRegion::Insula => "Insula",
            BrainRegion::Brainstem => "Brainstem",
            BrainRegion::CorpusCallosum => "Corpus Callosum",
            BrainRegion::SensoryCortex => "Sensory Cortex",
            BrainRegion::VisualCortex => "Visual Cortex",
            BrainRegion::TemporalLobe => "Temporal Lobe",
            BrainRegion::Cerebellum => "Cerebellum",
            BrainRegion::LimbicSystem => "Limbic System",
            BrainRegion::WhiteMatter => "White Matter",
            BrainRegion::ExecutiveNetwork => "Executive Network",
            BrainRegion::PrefrontalLimbicConnectivity => "Prefrontal-Limbic Connectivity",
            BrainRegion::DefaultModeNetwork => "Default Mode Network",
            BrainRegion::WholeBrain => "Whole Brain",
        }
    }

    /// Resolves a region name, accepting known aliases case-insensitively.
    ///
    /// Returns None for names with no canonical counterpart.
    pub fn resolve(name: &str) -> Option<BrainRegion> {
        let key = name.trim().to_lowercase();
        let region = match key.as_str() {
            "prefrontal cortex" | "pfc" | "prefrontal" | "superior frontal" => {
                BrainRegion::PrefrontalCortex
            }
            "medial prefrontal cortex" | "mpfc" | "vmpfc" | "ventromedial prefrontal" => {
                BrainRegion::MedialPrefrontalCortex
            }
            "orbitofrontal cortex" | "ofc" | "lateral orbitofrontal" | "medial orbitofrontal" => {
                BrainRegion::OrbitofrontalCortex
            }
            "anterior cingulate" | "anterior cingulate cortex" | "acc" => {
                BrainRegion::AnteriorCingulate
            }
            "amygdala" => BrainRegion::Amygdala,
            "hippocampus" => BrainRegion::Hippocampus,
            "thalamus" => BrainRegion::Thalamus,
            "insula" => BrainRegion::Insula,
            "brainstem" | "brain stem" | "midbrain" => BrainRegion::Brainstem,
            "corpus callosum" => BrainRegion::CorpusCallosum,
            "sensory cortex" | "somatosensory cortex" | "postcentral" => {
                BrainRegion::SensoryCortex
            }
            "visual cortex" | "pericalcarine" | "visual association areas" => {
                BrainRegion::VisualCortex
            }
            "temporal lobe" | "superior temporal" | "middle temporal" => BrainRegion::TemporalLobe,
            "cerebellum" | "cerebellar cortex" | "cerebellar vermis" => BrainRegion::Cerebellum,
            "limbic system" => BrainRegion::LimbicSystem,
            "white matter" | "white matter integrity" => BrainRegion::WhiteMatter,
            "executive network" | "executive networks" => BrainRegion::ExecutiveNetwork,
            "prefrontal-limbic connectivity" | "prefrontal limbic connectivity" => {
                BrainRegion::PrefrontalLimbicConnectivity
            }
            "default mode network" | "dmn" => BrainRegion::DefaultModeNetwork,
            "whole brain" | "overall brain volume" => BrainRegion::WholeBrain,
            _ => return None,
        };
        Some(region)
    }

    /// Returns true for cortical regions (canonical name contains "Cortex").
    pub fn is_cortical(&self) -> bool {
        matches!(
            self,
            BrainRegion::PrefrontalCortex
                | BrainRegion::MedialPrefrontalCortex
                | BrainRegion::OrbitofrontalCortex
                | BrainRegion::SensoryCortex
                | BrainRegion::VisualCortex
        )
    }

    /// Returns true for distributed functional networks.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            BrainRegion::ExecutiveNetwork | BrainRegion::DefaultModeNetwork
        )
    }
}

impl fmt::Display for BrainRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for BrainRegion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for BrainRegion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        BrainRegion::resolve(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown brain region '{}'", name)))
    }
}
