use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the unit weight of water γw in g/cm³
pub const UNIT_WEIGHT_WATER: f64 = 1.0;

/// Defines the default specific gravity of solids Gs
pub const DEFAULT_SPECIFIC_GRAVITY: f64 = 2.65;

fn default_specific_gravity() -> f64 {
    DEFAULT_SPECIFIC_GRAVITY
}

/// Holds the laboratory measurements defining a soil phase diagram
///
/// Every field is optional in the JSON representation; absent fields
/// default to zero, except the specific gravity which defaults to 2.65.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PhaseInput {
    /// Total volume of the sample V
    #[serde(default)]
    pub total_volume: f64, // cm³

    /// Volume of solids Vs
    #[serde(default)]
    pub solid_volume: f64, // cm³

    /// Volume of water Vw
    #[serde(default)]
    pub water_volume: f64, // cm³

    /// Weight of solids Ws
    #[serde(default)]
    pub solid_weight: f64, // g

    /// Weight of water Ww
    #[serde(default)]
    pub water_weight: f64, // g

    /// Specific gravity of solids Gs = ρs/ρw
    #[serde(default = "default_specific_gravity")]
    pub specific_gravity: f64, // [-]
}

impl Default for PhaseInput {
    fn default() -> Self {
        PhaseInput {
            total_volume: 0.0,
            solid_volume: 0.0,
            water_volume: 0.0,
            solid_weight: 0.0,
            water_weight: 0.0,
            specific_gravity: DEFAULT_SPECIFIC_GRAVITY,
        }
    }
}

impl PhaseInput {
    /// Reads a JSON file containing the laboratory measurements
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let input = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(input)
    }

    /// Writes a JSON file with the laboratory measurements
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Holds the phase relations derived from one set of laboratory measurements
///
/// A snapshot is computed in one shot and never mutated; a new computation
/// produces a whole new snapshot. All values are kept as raw floats; rounding
/// happens only at presentation time (see PhaseReport).
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct PhaseRelations {
    /// Volume of air Va = V - Vs - Vw
    pub air_volume: f64, // cm³

    /// Volume of voids Vv = V - Vs
    pub void_volume: f64, // cm³

    /// Porosity n = 100 Vv/V
    pub porosity: f64, // %

    /// Void ratio e = Vv/Vs
    pub void_ratio: f64, // [-]

    /// Degree of saturation S = 100 Vw/Vv (zero when Vv = 0)
    pub saturation: f64, // %

    /// Air content A = 100 Va/Vv (zero when Vv = 0)
    pub air_content: f64, // %

    /// Total weight W = Ws + Ww
    pub total_weight: f64, // g

    /// Moisture content w = 100 Ww/Ws (zero when Ws = 0)
    pub moisture_content: f64, // %

    /// Specific gravity of solids Gs (echoed from the input)
    pub specific_gravity: f64, // [-]

    /// Bulk (moist) unit weight γ = W/V
    pub bulk_unit_weight: f64, // g/cm³

    /// Dry unit weight γd = Ws/V
    pub dry_unit_weight: f64, // g/cm³

    /// Saturated unit weight γsat = (Ws + γw Vv)/V
    pub saturated_unit_weight: f64, // g/cm³

    /// Submerged (buoyant) unit weight γ' = γsat - γw
    pub submerged_unit_weight: f64, // g/cm³
}

impl PhaseRelations {
    /// Computes the phase relations for given laboratory measurements
    ///
    /// Only the total volume and the volume of solids are validated; all
    /// other measurements pass through unchecked, including negative values,
    /// and propagate into the derived ratios. The original dashboard behaves
    /// this way and the results feed informational display only.
    pub fn new(input: &PhaseInput) -> Result<Self, StrError> {
        if input.total_volume <= 0.0 {
            return Err("total volume (V) must be greater than zero");
        }
        if input.solid_volume <= 0.0 {
            return Err("solid volume (Vs) must be greater than zero");
        }

        let v = input.total_volume;
        let vs = input.solid_volume;
        let vw = input.water_volume;
        let ws = input.solid_weight;
        let ww = input.water_weight;

        // intermediate volumes and total weight
        let va = v - vs - vw;
        let vv = v - vs;
        let w = ws + ww;

        // volumetric relations
        let porosity = 100.0 * vv / v;
        let void_ratio = vv / vs;
        let saturation = if vv > 0.0 { 100.0 * vw / vv } else { 0.0 };
        let air_content = if vv > 0.0 { 100.0 * va / vv } else { 0.0 };

        // gravimetric relations
        let moisture_content = if ws > 0.0 { 100.0 * ww / ws } else { 0.0 };

        // unit weights (γw = 1 g/cm³)
        let bulk_unit_weight = w / v;
        let dry_unit_weight = ws / v;
        let saturated_unit_weight = (ws + UNIT_WEIGHT_WATER * vv) / v;
        let submerged_unit_weight = saturated_unit_weight - UNIT_WEIGHT_WATER;

        Ok(PhaseRelations {
            air_volume: va,
            void_volume: vv,
            porosity,
            void_ratio,
            saturation,
            air_content,
            total_weight: w,
            moisture_content,
            specific_gravity: input.specific_gravity,
            bulk_unit_weight,
            dry_unit_weight,
            saturated_unit_weight,
            submerged_unit_weight,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{PhaseInput, PhaseRelations, DEFAULT_SPECIFIC_GRAVITY};
    use crate::StrError;
    use russell_chk::assert_approx_eq;

    #[test]
    fn default_input_works() {
        let input = PhaseInput::default();
        assert_eq!(input.total_volume, 0.0);
        assert_eq!(input.specific_gravity, DEFAULT_SPECIFIC_GRAVITY);
    }

    #[test]
    fn serde_defaults_work() -> Result<(), StrError> {
        let input: PhaseInput = serde_json::from_str("{\"total_volume\": 100.0, \"solid_volume\": 60.0}")
            .map_err(|_| "deserialize failed")?;
        assert_eq!(input.total_volume, 100.0);
        assert_eq!(input.water_volume, 0.0);
        assert_eq!(input.specific_gravity, 2.65);
        Ok(())
    }

    #[test]
    fn new_captures_invalid_volumes() {
        let mut input = PhaseInput::default();
        assert_eq!(
            PhaseRelations::new(&input).err(),
            Some("total volume (V) must be greater than zero")
        );
        input.total_volume = 100.0;
        assert_eq!(
            PhaseRelations::new(&input).err(),
            Some("solid volume (Vs) must be greater than zero")
        );
        input.solid_volume = -1.0;
        assert_eq!(
            PhaseRelations::new(&input).err(),
            Some("solid volume (Vs) must be greater than zero")
        );
    }

    #[test]
    fn new_works() -> Result<(), StrError> {
        let input = PhaseInput {
            total_volume: 100.0,
            solid_volume: 60.0,
            water_volume: 30.0,
            solid_weight: 150.0,
            water_weight: 30.0,
            specific_gravity: 2.65,
        };
        let res = PhaseRelations::new(&input)?;
        assert_approx_eq!(res.air_volume, 10.0, 1e-15);
        assert_approx_eq!(res.void_volume, 40.0, 1e-15);
        assert_approx_eq!(res.porosity, 40.0, 1e-13);
        assert_approx_eq!(res.void_ratio, 2.0 / 3.0, 1e-15);
        assert_approx_eq!(res.saturation, 75.0, 1e-13);
        assert_approx_eq!(res.air_content, 25.0, 1e-13);
        assert_approx_eq!(res.total_weight, 180.0, 1e-15);
        assert_approx_eq!(res.moisture_content, 20.0, 1e-13);
        assert_eq!(res.specific_gravity, 2.65);
        assert_approx_eq!(res.bulk_unit_weight, 1.8, 1e-15);
        assert_approx_eq!(res.dry_unit_weight, 1.5, 1e-15);
        assert_approx_eq!(res.saturated_unit_weight, 1.9, 1e-15);
        assert_approx_eq!(res.submerged_unit_weight, 0.9, 1e-15);
        Ok(())
    }

    #[test]
    fn new_is_idempotent() -> Result<(), StrError> {
        let input = PhaseInput {
            total_volume: 100.0,
            solid_volume: 60.0,
            water_volume: 30.0,
            solid_weight: 150.0,
            water_weight: 30.0,
            specific_gravity: 2.65,
        };
        let first = PhaseRelations::new(&input)?;
        let second = PhaseRelations::new(&input)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn zero_guards_work() -> Result<(), StrError> {
        // Vv = 0: saturation and air content must be zero, not NaN
        let input = PhaseInput {
            total_volume: 50.0,
            solid_volume: 50.0,
            water_volume: 10.0,
            solid_weight: 0.0,
            water_weight: 5.0,
            specific_gravity: 2.65,
        };
        let res = PhaseRelations::new(&input)?;
        assert_eq!(res.void_volume, 0.0);
        assert_eq!(res.saturation, 0.0);
        assert_eq!(res.air_content, 0.0);
        // Ws = 0: moisture content must be zero
        assert_eq!(res.moisture_content, 0.0);
        Ok(())
    }

    #[test]
    fn nonsensical_values_pass_through() -> Result<(), StrError> {
        // Vw greater than Vv yields saturation above 100 %
        let input = PhaseInput {
            total_volume: 100.0,
            solid_volume: 80.0,
            water_volume: 40.0,
            solid_weight: -10.0,
            water_weight: 0.0,
            specific_gravity: 2.65,
        };
        let res = PhaseRelations::new(&input)?;
        assert_approx_eq!(res.saturation, 200.0, 1e-12);
        assert_approx_eq!(res.air_volume, -20.0, 1e-15);
        assert_approx_eq!(res.bulk_unit_weight, -0.1, 1e-15);
        Ok(())
    }
}
