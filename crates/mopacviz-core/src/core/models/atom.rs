use nalgebra::Point3;

/// A single atom of the final optimized structure.
///
/// Coordinates are Cartesian and expressed in Angstroms. The Mulliken partial
/// charge is only present when the charge table could be matched one-to-one
/// against the geometry table.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The chemical element symbol as printed in the source table (e.g., "C", "Cl").
    pub symbol: String,
    /// The Cartesian position of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The Mulliken partial charge in elementary charge units, if assigned.
    pub charge: Option<f64>,
}

impl AtomRecord {
    /// Creates a new atom without a charge.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The element symbol of the atom.
    /// * `position` - The Cartesian coordinates in Angstroms.
    pub fn new(symbol: &str, position: Point3<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
            charge: None,
        }
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = Some(charge);
        self
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_no_charge() {
        let atom = AtomRecord::new("C", Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.symbol, "C");
        assert_eq!(atom.charge, None);
        assert_eq!((atom.x(), atom.y(), atom.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn with_charge_sets_the_charge() {
        let atom = AtomRecord::new("O", Point3::origin()).with_charge(-0.4321);
        assert_eq!(atom.charge, Some(-0.4321));
    }
}
