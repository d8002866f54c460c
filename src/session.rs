use crate::{PhaseInput, PhaseReport, PhaseRelations, StrError, DEFAULT_SPECIFIC_GRAVITY};

/// Parses a numeric text field, coercing blank or unparseable text to zero
///
/// This is the boundary rule of the input form: fields are never rejected
/// for being empty or malformed; they simply contribute nothing.
pub fn parse_or_zero(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Parses the specific-gravity text field
///
/// Blank, unparseable, or zero text falls back to the default Gs = 2.65,
/// reproducing the falsy coercion of the original form.
pub fn parse_specific_gravity(text: &str) -> f64 {
    let value = parse_or_zero(text);
    if value == 0.0 {
        DEFAULT_SPECIFIC_GRAVITY
    } else {
        value
    }
}

/// Holds the raw text of the six input fields of the phase-relations form
#[derive(Clone, Debug)]
pub struct PhaseForm {
    /// Total volume V field
    pub total_volume: String,

    /// Volume of solids Vs field
    pub solid_volume: String,

    /// Volume of water Vw field
    pub water_volume: String,

    /// Weight of solids Ws field
    pub solid_weight: String,

    /// Weight of water Ww field
    pub water_weight: String,

    /// Specific gravity Gs field (pre-filled with 2.65)
    pub specific_gravity: String,
}

impl PhaseForm {
    /// Allocates a new form with all fields at their defaults
    pub fn new() -> Self {
        PhaseForm {
            total_volume: String::new(),
            solid_volume: String::new(),
            water_volume: String::new(),
            solid_weight: String::new(),
            water_weight: String::new(),
            specific_gravity: DEFAULT_SPECIFIC_GRAVITY.to_string(),
        }
    }

    /// Coerces the raw text fields into well-typed measurements
    pub fn to_input(&self) -> PhaseInput {
        PhaseInput {
            total_volume: parse_or_zero(&self.total_volume),
            solid_volume: parse_or_zero(&self.solid_volume),
            water_volume: parse_or_zero(&self.water_volume),
            solid_weight: parse_or_zero(&self.solid_weight),
            water_weight: parse_or_zero(&self.water_weight),
            specific_gravity: parse_specific_gravity(&self.specific_gravity),
        }
    }

    /// Resets all fields to their defaults
    pub fn clear(&mut self) {
        *self = PhaseForm::new();
    }
}

/// Implements the compute/clear lifecycle of the phase-relations form
///
/// The session owns the current form and at most one result snapshot.
/// A successful computation replaces the snapshot entirely; a rejected one
/// leaves the previous snapshot untouched; clearing drops it. Access is
/// serialized by the caller (one user action at a time), so no interior
/// locking is needed.
pub struct PhaseSession {
    /// Current input form
    pub form: PhaseForm,

    /// Result of the most recent successful computation
    relations: Option<PhaseRelations>,
}

impl PhaseSession {
    /// Allocates a new session in the empty state
    pub fn new() -> Self {
        PhaseSession {
            form: PhaseForm::new(),
            relations: None,
        }
    }

    /// Computes the phase relations from the current form fields
    ///
    /// On rejection (missing total or solid volume) the error is returned
    /// and the previously computed snapshot, if any, is kept as is.
    pub fn compute(&mut self) -> Result<&PhaseRelations, StrError> {
        let relations = PhaseRelations::new(&self.form.to_input())?;
        Ok(self.relations.insert(relations))
    }

    /// Clears the form and discards any computed snapshot
    pub fn clear(&mut self) {
        self.form.clear();
        self.relations = None;
    }

    /// Returns the current snapshot, if a computation succeeded
    pub fn relations(&self) -> Option<&PhaseRelations> {
        self.relations.as_ref()
    }

    /// Presents the current snapshot as a grouped report
    pub fn report(&self) -> Option<PhaseReport> {
        self.relations.as_ref().map(PhaseReport::new)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
