use super::atom::AtomRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("cannot assign {charges} charges to {atoms} atoms")]
pub struct ChargeCountMismatch {
    pub atoms: usize,
    pub charges: usize,
}

/// An ordered collection of atoms extracted from a single output file.
///
/// The order of the atoms always matches the order of the rows in the source
/// geometry table. Charges are either present on every atom or on none of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atoms: Vec<AtomRecord>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a molecule from atoms that carry no charges.
    ///
    /// Any charge already present on the supplied atoms is discarded so that the
    /// all-or-nothing charge invariant holds; use [`Molecule::assign_charges`] to
    /// attach charges afterwards.
    pub fn from_atoms(atoms: Vec<AtomRecord>) -> Self {
        let atoms = atoms
            .into_iter()
            .map(|mut atom| {
                atom.charge = None;
                atom
            })
            .collect();
        Self { atoms }
    }

    pub fn push(&mut self, symbol: &str, position: nalgebra::Point3<f64>) {
        self.atoms.push(AtomRecord::new(symbol, position));
        self.clear_charges();
    }

    /// Attaches one charge to every atom, matched by position in the sequence.
    ///
    /// # Arguments
    ///
    /// * `charges` - The charges in the same order as the atoms.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeCountMismatch`] if the number of charges differs from the
    /// number of atoms. The molecule is left without charges in that case.
    pub fn assign_charges(&mut self, charges: &[f64]) -> Result<(), ChargeCountMismatch> {
        if charges.len() != self.atoms.len() {
            self.clear_charges();
            return Err(ChargeCountMismatch {
                atoms: self.atoms.len(),
                charges: charges.len(),
            });
        }
        for (atom, &charge) in self.atoms.iter_mut().zip(charges) {
            atom.charge = Some(charge);
        }
        Ok(())
    }

    pub fn clear_charges(&mut self) {
        for atom in &mut self.atoms {
            atom.charge = None;
        }
    }

    /// Returns `true` when every atom carries a charge.
    ///
    /// An empty molecule has no charges.
    pub fn has_charges(&self) -> bool {
        !self.atoms.is_empty() && self.atoms.iter().all(|a| a.charge.is_some())
    }

    /// Returns the charges in atom order, or `None` if they were not assigned.
    pub fn charges(&self) -> Option<Vec<f64>> {
        if !self.has_charges() {
            return None;
        }
        self.atoms.iter().map(|a| a.charge).collect()
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AtomRecord> {
        self.atoms.iter()
    }
}

impl<'a> IntoIterator for &'a Molecule {
    type Item = &'a AtomRecord;
    type IntoIter = std::slice::Iter<'a, AtomRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
