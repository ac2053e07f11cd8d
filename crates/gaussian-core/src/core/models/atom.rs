use nalgebra::Point3;

/// An atom of a structure: its chemical-element symbol and Cartesian position.
///
/// Positions are in Angstroms and are written into the input deck unchanged,
/// so no unit conversion happens anywhere in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The chemical-element symbol (e.g., "C", "O", "Cl").
    pub symbol: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from an element symbol and a position.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical-element symbol.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(symbol: &str, position: Point3<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
        }
    }
}
