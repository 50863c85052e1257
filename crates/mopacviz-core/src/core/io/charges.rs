use super::traits::StructureWriter;
use crate::core::models::molecule::Molecule;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChargeTableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ChargeRow<'a> {
    index: usize,
    symbol: &'a str,
    x: f64,
    y: f64,
    z: f64,
    charge: Option<f64>,
}

/// A CSV table with one row per atom: `index,symbol,x,y,z,charge`.
///
/// The index is 1-based, matching the atom numbering of MOPAC output. The
/// charge column is left empty when charges were not assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChargeTable;

impl StructureWriter for ChargeTable {
    type Error = ChargeTableError;

    fn write_to(&self, molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        if molecule.is_empty() {
            return Ok(());
        }
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (i, atom) in molecule.iter().enumerate() {
            csv_writer.serialize(ChargeRow {
                index: i + 1,
                symbol: &atom.symbol,
                x: atom.x(),
                y: atom.y(),
                z: atom.z(),
                charge: atom.charge,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn render(molecule: &Molecule) -> String {
        let mut out = Vec::new();
        ChargeTable.write_to(molecule, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_one_row_per_atom() {
        let mut molecule = Molecule::new();
        molecule.push("O", Point3::new(0.0, 0.0, 0.5));
        molecule.push("H", Point3::new(0.0, 0.75, -0.25));
        molecule.assign_charges(&[-0.5, 0.25]).unwrap();

        let text = render(&molecule);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "index,symbol,x,y,z,charge");
        assert_eq!(lines[1], "1,O,0.0,0.0,0.5,-0.5");
        assert_eq!(lines[2], "2,H,0.0,0.75,-0.25,0.25");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn missing_charges_leave_the_column_empty() {
        let mut molecule = Molecule::new();
        molecule.push("C", Point3::new(1.5, 0.0, 0.0));

        let text = render(&molecule);
        assert_eq!(text.lines().nth(1), Some("1,C,1.5,0.0,0.0,"));
    }

    #[test]
    fn empty_molecule_writes_nothing() {
        assert!(render(&Molecule::new()).is_empty());
    }
}
