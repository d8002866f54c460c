use crate::PhaseRelations;
use serde::Serialize;
use std::fmt;

/// Holds one display-ready line of a report
#[derive(Clone, Debug, Serialize)]
pub struct ReportEntry {
    /// Quantity name, e.g. "Porosity (n)"
    pub label: &'static str,

    /// Formatted value (rounding happens here, never in the calculator)
    pub value: String,

    /// Unit of the value; empty for dimensionless quantities
    pub unit: &'static str,

    /// Defining formula, e.g. "n = Vv / V"
    pub hint: &'static str,
}

impl ReportEntry {
    fn new(label: &'static str, value: String, unit: &'static str, hint: &'static str) -> Self {
        ReportEntry { label, value, unit, hint }
    }
}

/// Presents the phase relations as three ordered groups of display entries
///
/// Porosity, saturation, air content, and moisture content are rounded to
/// two decimals; the void ratio, specific gravity, and unit weights to three.
#[derive(Clone, Debug, Serialize)]
pub struct PhaseReport {
    /// Volumetric relations: n, e, S, A
    pub volumetric: Vec<ReportEntry>,

    /// Gravimetric relations: w, Gs
    pub gravimetric: Vec<ReportEntry>,

    /// Unit weights: γ, γd, γsat, γ'
    pub unit_weights: Vec<ReportEntry>,
}

impl PhaseReport {
    /// Formats a new report for given phase relations
    pub fn new(res: &PhaseRelations) -> Self {
        let volumetric = vec![
            ReportEntry::new("Porosity (n)", format!("{:.2}", res.porosity), "%", "n = Vv / V"),
            ReportEntry::new("Void ratio (e)", format!("{:.3}", res.void_ratio), "", "e = Vv / Vs"),
            ReportEntry::new("Saturation (S)", format!("{:.2}", res.saturation), "%", "S = Vw / Vv"),
            ReportEntry::new("Air content (A)", format!("{:.2}", res.air_content), "%", "A = Va / Vv"),
        ];
        let gravimetric = vec![
            ReportEntry::new(
                "Moisture content (w)",
                format!("{:.2}", res.moisture_content),
                "%",
                "w = Ww / Ws",
            ),
            ReportEntry::new(
                "Specific gravity (Gs)",
                format!("{:.3}", res.specific_gravity),
                "",
                "Gs = ρs / ρw",
            ),
        ];
        let unit_weights = vec![
            ReportEntry::new(
                "Bulk unit weight (γ)",
                format!("{:.3}", res.bulk_unit_weight),
                "g/cm³",
                "γ = W / V",
            ),
            ReportEntry::new(
                "Dry unit weight (γd)",
                format!("{:.3}", res.dry_unit_weight),
                "g/cm³",
                "γd = Ws / V",
            ),
            ReportEntry::new(
                "Saturated unit weight (γsat)",
                format!("{:.3}", res.saturated_unit_weight),
                "g/cm³",
                "γsat = (Ws + γw·Vv) / V",
            ),
            ReportEntry::new(
                "Submerged unit weight (γ')",
                format!("{:.3}", res.submerged_unit_weight),
                "g/cm³",
                "γ' = γsat - γw",
            ),
        ];
        PhaseReport {
            volumetric,
            gravimetric,
            unit_weights,
        }
    }
}

fn write_group(f: &mut fmt::Formatter, title: &str, entries: &[ReportEntry]) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{:─^1$}", "", title.len())?;
    for entry in entries {
        if entry.unit.is_empty() {
            writeln!(f, "{:<30} = {:>10}   ({})", entry.label, entry.value, entry.hint)?;
        } else {
            writeln!(
                f,
                "{:<30} = {:>10} {:<5} ({})",
                entry.label, entry.value, entry.unit, entry.hint
            )?;
        }
    }
    Ok(())
}

impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_group(f, "Volumetric relations", &self.volumetric)?;
        writeln!(f)?;
        write_group(f, "Gravimetric relations", &self.gravimetric)?;
        writeln!(f)?;
        write_group(f, "Unit weights", &self.unit_weights)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
