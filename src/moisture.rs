use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the three weighings of a moisture-content test (ASTM D2216)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct MoistureTest {
    /// Weight of the empty container
    pub container_weight: f64, // g

    /// Weight of the container plus wet soil
    pub wet_weight: f64, // g

    /// Weight of the container plus oven-dried soil
    pub dry_weight: f64, // g
}

/// Qualifies a soil sample by its moisture content
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum MoistureClass {
    VeryDry,
    Dry,
    Moist,
    VeryMoist,
}

impl MoistureClass {
    /// Returns the class for given moisture content in percent
    pub fn from_moisture_content(w: f64) -> Self {
        if w < 10.0 {
            MoistureClass::VeryDry
        } else if w < 20.0 {
            MoistureClass::Dry
        } else if w < 30.0 {
            MoistureClass::Moist
        } else {
            MoistureClass::VeryMoist
        }
    }

    /// Returns the display name of this class
    pub fn name(&self) -> String {
        match self {
            MoistureClass::VeryDry => "Very Dry".to_string(),
            MoistureClass::Dry => "Dry".to_string(),
            MoistureClass::Moist => "Moist".to_string(),
            MoistureClass::VeryMoist => "Very Moist".to_string(),
        }
    }
}

/// Holds the results of a moisture-content test
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MoistureResult {
    /// Weight of evaporated water = wet - dry
    pub water_weight: f64, // g

    /// Weight of the dry soil = dry - container
    pub dry_soil_weight: f64, // g

    /// Moisture content w = 100 water/dry-soil
    pub moisture_content: f64, // %

    /// Qualitative class derived from the moisture content
    pub class: MoistureClass,
}

impl MoistureResult {
    /// Computes the moisture content for given weighings
    pub fn new(test: &MoistureTest) -> Result<Self, StrError> {
        if test.wet_weight <= test.container_weight {
            return Err("wet weight must be greater than the container weight");
        }
        if test.dry_weight <= test.container_weight {
            return Err("dry weight must be greater than the container weight");
        }
        if test.dry_weight > test.wet_weight {
            return Err("dry weight must not exceed the wet weight");
        }
        let water_weight = test.wet_weight - test.dry_weight;
        let dry_soil_weight = test.dry_weight - test.container_weight;
        let moisture_content = 100.0 * water_weight / dry_soil_weight;
        Ok(MoistureResult {
            water_weight,
            dry_soil_weight,
            moisture_content,
            class: MoistureClass::from_moisture_content(moisture_content),
        })
    }

    /// Returns the three worked calculation lines for display
    pub fn steps(&self, test: &MoistureTest) -> [String; 3] {
        [
            format!(
                "water weight = {:.2} - {:.2} = {:.2} g",
                test.wet_weight, test.dry_weight, self.water_weight
            ),
            format!(
                "dry soil weight = {:.2} - {:.2} = {:.2} g",
                test.dry_weight, test.container_weight, self.dry_soil_weight
            ),
            format!(
                "moisture content = ({:.2} / {:.2}) × 100 = {:.2} %",
                self.water_weight, self.dry_soil_weight, self.moisture_content
            ),
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
