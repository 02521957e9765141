//! Bundled reference catalog.
//!
//! Region effects and citations follow published findings on childhood
//! adversity; age multipliers encode developmental vulnerability windows
//! and duration modifiers encode exposure chronicity.

use once_cell::sync::Lazy;

use super::{
    AgeRange, DurationLevel, RegionEffect, TraumaCatalog, TraumaCategory, TraumaDefinition,
};
use crate::foundation::BrainRegion;

static DEFAULT_CATALOG: Lazy<TraumaCatalog> =
    Lazy::new(|| build_default_catalog().expect("bundled catalog entries are valid"));

/// Returns the bundled default catalog.
pub fn default_catalog() -> &'static TraumaCatalog {
    &DEFAULT_CATALOG
}

fn effect(region: BrainRegion, base_impact: f64, citation: &str) -> RegionEffect {
    RegionEffect::new(region, base_impact, citation)
}

fn build_default_catalog() -> Result<TraumaCatalog, super::CatalogError> {
    use BrainRegion::*;

    let traumas = vec![
        TraumaDefinition::adverse(
            "physical_abuse",
            TraumaCategory::Abuse,
            vec![
                effect(PrefrontalCortex, -12.0, "Teicher et al. (2016)"),
                effect(Amygdala, 18.0, "Hanson et al. (2010)"),
                effect(Hippocampus, -8.5, "Carrion et al. (2001)"),
            ],
        )?,
        TraumaDefinition::adverse(
            "sexual_abuse",
            TraumaCategory::Abuse,
            vec![
                effect(CorpusCallosum, -17.0, "Andersen et al. (2008)"),
                effect(SensoryCortex, -30.0, "Heim et al. (2013)"),
                effect(VisualCortex, -18.0, "Tomoda et al. (2009)"),
            ],
        )?,
        TraumaDefinition::adverse(
            "emotional_abuse",
            TraumaCategory::Abuse,
            vec![
                effect(MedialPrefrontalCortex, -14.0, "van Harmelen et al. (2010)"),
                effect(Amygdala, 22.0, "Dannlowski et al. (2012)"),
                effect(AnteriorCingulate, -9.0, "Edmiston et al. (2011)"),
            ],
        )?,
        TraumaDefinition::adverse(
            "physical_neglect",
            TraumaCategory::Neglect,
            vec![
                effect(OrbitofrontalCortex, -16.0, "Teicher et al. (2014)"),
                effect(Cerebellum, -8.0, "De Bellis et al. (2005)"),
                effect(WholeBrain, -7.0, "De Bellis et al. (2002)"),
            ],
        )?,
        TraumaDefinition::adverse(
            "emotional_neglect",
            TraumaCategory::Neglect,
            vec![effect(TemporalLobe, -11.0, "De Bellis et al. (2002)")],
        )?,
        TraumaDefinition::adverse(
            "substance_abuse",
            TraumaCategory::HouseholdDysfunction,
            vec![
                effect(WhiteMatter, -15.0, "Tapert et al. (2012)"),
                effect(ExecutiveNetwork, -12.0, "Clark et al. (2008)"),
            ],
        )?,
        TraumaDefinition::adverse(
            "mental_illness",
            TraumaCategory::HouseholdDysfunction,
            vec![
                effect(LimbicSystem, 20.0, "Lebel et al. (2016)"),
                effect(
                    PrefrontalLimbicConnectivity,
                    -25.0,
                    "Herringa et al. (2013)",
                ),
            ],
        )?,
        TraumaDefinition::adverse(
            "domestic_violence",
            TraumaCategory::HouseholdDysfunction,
            vec![
                effect(Amygdala, 15.0, "McCrory et al. (2011)"),
                effect(Insula, 12.0, "Teicher et al. (2014)"),
            ],
        )?,
        TraumaDefinition::protective(
            "protective_adult",
            0.30,
            "Werner & Smith (1992); Masten (2001)",
        )?,
    ];

    let age_ranges = vec![
        AgeRange::try_new("0-3", 3.0, "Critical attachment period")?,
        AgeRange::try_new("3-6", 2.0, "Peak hippocampal vulnerability")?,
        AgeRange::try_new("7-11", 1.5, "Social brain development")?,
        AgeRange::try_new("12-18", 1.2, "Prefrontal maturation")?,
    ];

    let duration_levels = vec![
        DurationLevel::try_new("single", 0.0, "Single incident")?,
        DurationLevel::try_new("<6months", 0.5, "Less than 6 months")?,
        DurationLevel::try_new("6-12months", 1.0, "6-12 months")?,
        DurationLevel::try_new("1-3years", 1.5, "1-3 years")?,
        DurationLevel::try_new(">3years", 2.0, "More than 3 years")?,
    ];

    TraumaCatalog::new(traumas, age_ranges, duration_levels)
}
