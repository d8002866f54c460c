use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the blow count at which the liquid limit is read (ASTM D4318)
pub const LIQUID_LIMIT_BLOWS: f64 = 25.0;

/// Holds one point of the flow curve of a liquid-limit test
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct FlowPoint {
    /// Number of blows to close the groove
    pub blows: f64, // [-]

    /// Moisture content of the specimen
    pub moisture: f64, // %
}

/// Computes the liquid limit by interpolating the flow curve at 25 blows
///
/// The moisture contents are interpolated linearly against log10 of the
/// blow counts, which is the straight-line space of the flow curve. The
/// data must contain points on both sides of 25 blows.
pub fn liquid_limit(points: &[FlowPoint]) -> Result<f64, StrError> {
    if points.len() < 2 {
        return Err("at least two flow-curve points are required");
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.blows.partial_cmp(&b.blows).unwrap());
    let min = sorted.first().unwrap().blows;
    let max = sorted.last().unwrap().blows;
    if max < LIQUID_LIMIT_BLOWS || min > LIQUID_LIMIT_BLOWS {
        return Err("flow-curve points must bracket 25 blows");
    }
    let target = f64::log10(LIQUID_LIMIT_BLOWS);
    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let x0 = f64::log10(a.blows);
        let x1 = f64::log10(b.blows);
        if target >= x0 && target <= x1 {
            if x1 == x0 {
                return Ok(a.moisture);
            }
            let t = (target - x0) / (x1 - x0);
            return Ok(a.moisture + t * (b.moisture - a.moisture));
        }
    }
    Err("flow-curve points must bracket 25 blows")
}

/// Computes the plastic limit as the average of the determinations
pub fn plastic_limit(moistures: &[f64]) -> Result<f64, StrError> {
    if moistures.is_empty() {
        return Err("at least one plastic-limit determination is required");
    }
    Ok(moistures.iter().sum::<f64>() / (moistures.len() as f64))
}

/// Qualifies a soil by its plasticity index
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum PlasticityClass {
    NonPlastic,
    Low,
    Medium,
    High,
}

impl PlasticityClass {
    /// Returns the display name of this class
    pub fn name(&self) -> String {
        match self {
            PlasticityClass::NonPlastic => "Non-Plastic".to_string(),
            PlasticityClass::Low => "Low Plasticity".to_string(),
            PlasticityClass::Medium => "Medium Plasticity".to_string(),
            PlasticityClass::High => "High Plasticity".to_string(),
        }
    }
}

/// Holds the plasticity index IP = LL - LP and its qualitative class
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PlasticityIndex {
    /// Liquid limit LL
    pub liquid_limit: f64, // %

    /// Plastic limit LP
    pub plastic_limit: f64, // %

    /// Plasticity index IP (zero when LL ≤ LP)
    pub index: f64, // %

    /// Qualitative class derived from IP
    pub class: PlasticityClass,
}

impl PlasticityIndex {
    /// Computes the plasticity index for given Atterberg limits
    ///
    /// A soil with LL ≤ LP is reported as non-plastic with IP = 0
    /// rather than carrying a negative index.
    pub fn new(liquid_limit: f64, plastic_limit: f64) -> Self {
        if liquid_limit <= plastic_limit {
            return PlasticityIndex {
                liquid_limit,
                plastic_limit,
                index: 0.0,
                class: PlasticityClass::NonPlastic,
            };
        }
        let index = liquid_limit - plastic_limit;
        let class = if index < 7.0 {
            PlasticityClass::Low
        } else if index < 17.0 {
            PlasticityClass::Medium
        } else {
            PlasticityClass::High
        };
        PlasticityIndex {
            liquid_limit,
            plastic_limit,
            index,
            class,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
