use super::atom::Atom;
use nalgebra::Point3;

/// An ordered, immutable list of atoms with Cartesian coordinates.
///
/// Atom order is significant: the input deck lists atoms exactly in the order
/// they were added. Use [`StructureBuilder`] to assemble one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
}

impl Structure {
    /// Creates an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> StructureBuilder {
        StructureBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns the element symbols in atom order.
    pub fn chemical_symbols(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|atom| atom.symbol.as_str())
    }

    /// Returns the atom positions in atom order.
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.atoms.iter().map(|atom| &atom.position)
    }
}

#[derive(Debug, Default)]
pub struct StructureBuilder {
    atoms: Vec<Atom>,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, symbol: &str, position: Point3<f64>) -> &mut Self {
        self.atoms.push(Atom::new(symbol, position));
        self
    }

    pub fn build(self) -> Structure {
        Structure { atoms: self.atoms }
    }
}
