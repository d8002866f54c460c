use crate::{FlowPoint, MoistureTest, PhaseInput};

/// Holds functions generating sample laboratory data
pub struct SampleData;

impl SampleData {
    /// Returns the measurements of a typical moist sand sample
    ///
    /// This is the worked example of the phase-relations form:
    /// n = 40 %, e = 0.667, S = 75 %, A = 25 %, w = 20 %,
    /// γ = 1.8, γd = 1.5, γsat = 1.9, γ' = 0.9 g/cm³.
    pub fn phase_input() -> PhaseInput {
        PhaseInput {
            total_volume: 100.0,    // cm³
            solid_volume: 60.0,     // cm³
            water_volume: 30.0,     // cm³
            solid_weight: 150.0,    // g
            water_weight: 30.0,     // g
            specific_gravity: 2.65, // [-]
        }
    }

    /// Returns the weighings of a moisture-content test with w = 20 %
    pub fn moisture_test() -> MoistureTest {
        MoistureTest {
            container_weight: 50.0, // g
            wet_weight: 170.0,      // g
            dry_weight: 150.0,      // g
        }
    }

    /// Returns a flow curve whose liquid limit is 42 %
    pub fn flow_curve() -> Vec<FlowPoint> {
        vec![
            FlowPoint {
                blows: 17.0,
                moisture: 46.1,
            },
            FlowPoint {
                blows: 20.0,
                moisture: 44.0,
            },
            FlowPoint {
                blows: 31.25,
                moisture: 40.0,
            },
            FlowPoint {
                blows: 38.0,
                moisture: 38.4,
            },
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
