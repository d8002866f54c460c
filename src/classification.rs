use crate::StrError;
use serde::Serialize;

/// Holds a classification under the Unified Soil Classification System
#[derive(Clone, Debug, Serialize)]
pub struct UscsClass {
    /// Group symbol, e.g. "CL" or "SW/SP"
    pub symbol: &'static str,

    /// Group name, e.g. "Low-plasticity clay"
    pub name: &'static str,

    /// Supporting detail, e.g. the fines percentage considered
    pub description: String,

    /// Major division: fine soil, gravel, or sand
    pub category: &'static str,
}

/// Classifies a soil under the USCS from its grain-size fractions
///
/// # Input
///
/// * `gravel` -- percent retained on the No. 4 sieve
/// * `sand` -- percent passing No. 4 and retained on No. 200
/// * `fines` -- percent passing the No. 200 sieve
/// * `liquid_limit`, `plasticity_index` -- Atterberg data, when available;
///   without them, fine soils and dirty coarse soils fall into the broader
///   dual symbols
pub fn classify_uscs(
    gravel: f64,
    sand: f64,
    fines: f64,
    liquid_limit: Option<f64>,
    plasticity_index: Option<f64>,
) -> Result<UscsClass, StrError> {
    let total = gravel + sand + fines;
    if f64::abs(total - 100.0) > 1.0 {
        return Err("grain-size fractions must add up to 100 %");
    }
    if fines > 50.0 {
        return Ok(classify_uscs_fine(liquid_limit, plasticity_index));
    }
    if gravel > sand {
        Ok(classify_uscs_coarse(fines, plasticity_index, true))
    } else {
        Ok(classify_uscs_coarse(fines, plasticity_index, false))
    }
}

/// Classifies a fine soil using the plasticity chart (A-line)
fn classify_uscs_fine(liquid_limit: Option<f64>, plasticity_index: Option<f64>) -> UscsClass {
    let (ll, ip) = match (liquid_limit, plasticity_index) {
        (Some(ll), Some(ip)) => (ll, ip),
        _ => {
            return UscsClass {
                symbol: "M/C",
                name: "Silt or clay",
                description: "Atterberg limits required for a precise classification".to_string(),
                category: "Fine soil",
            }
        }
    };
    let a_line = 0.73 * (ll - 20.0);
    let (symbol, name) = if ll < 50.0 {
        if ip > 7.0 && ip > a_line {
            ("CL", "Low-plasticity clay")
        } else if ip < 4.0 {
            ("ML-CL", "Silty clay")
        } else {
            ("ML", "Low-plasticity silt")
        }
    } else {
        if ip > a_line {
            ("CH", "High-plasticity clay")
        } else {
            ("MH", "High-plasticity silt")
        }
    };
    UscsClass {
        symbol,
        name,
        description: format!("LL = {} %, IP = {} %", ll, ip),
        category: "Fine soil",
    }
}

/// Classifies a coarse soil (gravel or sand) by its fines content
fn classify_uscs_coarse(fines: f64, plasticity_index: Option<f64>, is_gravel: bool) -> UscsClass {
    let category = if is_gravel { "Gravel" } else { "Sand" };
    if fines < 5.0 {
        let (symbol, name) = if is_gravel {
            ("GW/GP", "Well/poorly graded gravel")
        } else {
            ("SW/SP", "Well/poorly graded sand")
        };
        return UscsClass {
            symbol,
            name,
            description: "full grain-size analysis required".to_string(),
            category,
        };
    }
    if fines > 12.0 {
        let clayey = matches!(plasticity_index, Some(ip) if ip > 7.0);
        let (symbol, name) = match (is_gravel, clayey) {
            (true, true) => ("GC", "Clayey gravel"),
            (true, false) => ("GM", "Silty gravel"),
            (false, true) => ("SC", "Clayey sand"),
            (false, false) => ("SM", "Silty sand"),
        };
        return UscsClass {
            symbol,
            name,
            description: format!("{} % fines", fines),
            category,
        };
    }
    let (symbol, name) = if is_gravel {
        ("GW-GM/GC", "Gravel with fines")
    } else {
        ("SW-SM/SC", "Sand with fines")
    };
    UscsClass {
        symbol,
        name,
        description: format!("{} % fines (borderline)", fines),
        category,
    }
}

/// Holds a classification under the AASHTO system
#[derive(Clone, Debug, Serialize)]
pub struct AashtoClass {
    /// Group designation, e.g. "A-2-4" or "A-7-6"
    pub group: &'static str,

    /// Group index, clamped to 0 ≤ GI ≤ 20
    pub group_index: u32,

    /// Typical constituent materials of the group
    pub description: &'static str,

    /// Subgrade rating derived from the group index
    pub rating: &'static str,

    /// Suggested pavement use of the group family
    pub suggested_use: &'static str,
}

impl AashtoClass {
    /// Renders the group label with the group-index suffix, e.g. "A-6 (9)"
    pub fn label(&self) -> String {
        if self.group_index > 0 {
            format!("{} ({})", self.group, self.group_index)
        } else {
            self.group.to_string()
        }
    }
}

/// Classifies a soil under the AASHTO system
///
/// # Input
///
/// * `fines` -- percent passing the No. 200 sieve
/// * `liquid_limit`, `plasticity_index` -- Atterberg data in percent
pub fn classify_aashto(fines: f64, liquid_limit: f64, plasticity_index: f64) -> AashtoClass {
    let ff = fines;
    let ll = liquid_limit;
    let ip = plasticity_index;

    // group index, zero for granular materials
    let group_index = if ff <= 35.0 {
        0
    } else {
        let a = f64::max(0.0, ff - 35.0);
        let b = f64::max(0.0, ff - 15.0);
        let c = f64::max(0.0, ll - 40.0);
        let d = f64::max(0.0, ip - 10.0);
        let gi = 0.2 * a + 0.005 * a * c + 0.01 * b * d;
        f64::min(20.0, f64::max(0.0, gi.round())) as u32
    };

    // group selection
    let (group, description) = if ff <= 35.0 {
        // granular materials
        if ff <= 15.0 && ip <= 6.0 {
            ("A-1-a", "Rock fragments, gravel, and sand")
        } else if ff <= 25.0 && ip <= 6.0 {
            ("A-1-b", "Gravel and sand")
        } else if ff <= 10.0 && ip == 0.0 {
            ("A-3", "Fine sand")
        } else if ip <= 10.0 {
            ("A-2-4", "Silty or clayey gravel and sand")
        } else {
            ("A-2-7", "Clayey gravel and sand")
        }
    } else {
        // silt-clay materials
        if ll <= 40.0 {
            if ip <= 10.0 {
                ("A-4", "Silty soils")
            } else {
                ("A-6", "Clayey soils")
            }
        } else {
            if ip <= 10.0 {
                ("A-5", "Elastic silty soils")
            } else if ip <= ll - 30.0 {
                ("A-7-5", "Elastic clayey soils")
            } else {
                ("A-7-6", "Elastic clayey soils")
            }
        }
    };

    let rating = if group_index == 0 {
        "Excellent to Good"
    } else if group_index <= 4 {
        "Good to Fair"
    } else if group_index <= 8 {
        "Fair to Poor"
    } else {
        "Poor"
    };

    let suggested_use = if group.starts_with("A-1") || group == "A-3" {
        "Excellent for subgrade and base"
    } else if group.starts_with("A-2") {
        "Good for subgrade, fair for base"
    } else if group.starts_with("A-4") || group.starts_with("A-5") {
        "Fair for subgrade"
    } else {
        "Not recommended for roads without stabilization"
    };

    AashtoClass {
        group,
        group_index,
        description,
        rating,
        suggested_use,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
