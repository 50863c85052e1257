use super::traits::{StructureReader, StructureWriter};
use crate::core::models::atom::AtomRecord;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const DEFAULT_XYZ_COMMENT: &str = "Molecule generated from MOPAC output";

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{0}')")]
    InvalidCount(String),
    #[error("Invalid {axis} coordinate (value: '{value}')")]
    InvalidFloat { axis: char, value: String },
    #[error("Atom line must contain a symbol and three coordinates")]
    LineTooShort,
}

/// Formats one atom as `symbol x y z` with eight decimals per coordinate.
pub fn format_atom_line(atom: &AtomRecord) -> String {
    format!(
        "{} {:.8} {:.8} {:.8}",
        atom.symbol,
        atom.x(),
        atom.y(),
        atom.z()
    )
}

/// The plain XYZ coordinate format: an atom count, a comment line, and one
/// `symbol x y z` line per atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyzFile {
    comment: String,
}

impl Default for XyzFile {
    fn default() -> Self {
        Self::with_comment(DEFAULT_XYZ_COMMENT)
    }
}

impl XyzFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with a custom comment line.
    ///
    /// Line breaks in the comment are replaced with spaces, since the format
    /// reserves exactly one line for it.
    pub fn with_comment(comment: &str) -> Self {
        Self {
            comment: comment.replace(['\r', '\n'], " "),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl StructureWriter for XyzFile {
    type Error = XyzError;

    fn write_to(&self, molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        if molecule.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", molecule.len())?;
        writeln!(writer, "{}", self.comment)?;
        for atom in molecule {
            writeln!(writer, "{}", format_atom_line(atom))?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl StructureReader for XyzFile {
    type Error = XyzError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let mut lines = reader.lines();

        let count_line = lines
            .next()
            .ok_or_else(|| XyzError::MissingRecord("atom count".into()))??;
        let count: usize = count_line.trim().parse().map_err(|_| XyzError::Parse {
            line: 1,
            kind: XyzParseErrorKind::InvalidCount(count_line.trim().into()),
        })?;

        lines
            .next()
            .ok_or_else(|| XyzError::MissingRecord("comment line".into()))??;

        let mut atoms = Vec::new();
        for index in 0..count {
            let line_num = index + 3;
            let line = lines.next().ok_or_else(|| {
                XyzError::MissingRecord(format!("atom {} of {}", index + 1, count))
            })??;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return Err(XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::LineTooShort,
                });
            }
            let mut coords = [0.0; 3];
            let fields = ['x', 'y', 'z'].into_iter().zip(&parts[1..4]);
            for (slot, (axis, value)) in coords.iter_mut().zip(fields) {
                *slot = value.parse().map_err(|_| XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::InvalidFloat {
                        axis,
                        value: value.to_string(),
                    },
                })?;
            }
            atoms.push(AtomRecord::new(
                parts[0],
                Point3::new(coords[0], coords[1], coords[2]),
            ));
        }
        Ok(Molecule::from_atoms(atoms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::traits::WriteOutcome;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn methylene() -> Molecule {
        let mut molecule = Molecule::new();
        molecule.push("C", Point3::new(0.0, 0.0, 0.0));
        molecule.push("H", Point3::new(1.09, 0.0, 0.0));
        molecule.push("H", Point3::new(-0.36333333, 1.02766186, 0.0));
        molecule
    }

    #[test]
    fn writes_count_comment_and_atom_lines() {
        let mut out = Vec::new();
        XyzFile::new().write_to(&methylene(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "3\n\
             Molecule generated from MOPAC output\n\
             C 0.00000000 0.00000000 0.00000000\n\
             H 1.09000000 0.00000000 0.00000000\n\
             H -0.36333333 1.02766186 0.00000000\n"
        );
    }

    #[test]
    fn custom_comment_is_kept_on_one_line() {
        let file = XyzFile::with_comment("first\nsecond");
        assert_eq!(file.comment(), "first second");
    }

    #[test]
    fn empty_molecule_writes_nothing_and_creates_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xyz");

        let outcome = XyzFile::new().write_to_path(&Molecule::new(), &path).unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped);
        assert!(!path.exists());
    }

    #[test]
    fn written_file_reads_back_within_tolerance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.xyz");
        let mut original = Molecule::new();
        original.push("C", Point3::new(1.234567891234, -0.000000004, 12.5));
        original.push("Cl", Point3::new(-3.14159265358979, 2.71828182845904, 0.1));
        original.push("H", Point3::new(0.0, 0.0, -7.777777777));

        let outcome = XyzFile::new().write_to_path(&original, &path).unwrap();
        assert_eq!(outcome, WriteOutcome::Written(path.clone()));

        let reread = XyzFile::new().read_from_path(&path).unwrap();
        assert_eq!(reread.len(), original.len());
        for (a, b) in original.iter().zip(reread.iter()) {
            assert_eq!(a.symbol, b.symbol);
            assert!((a.position - b.position).amax() <= 1e-8);
        }
    }

    #[test]
    fn reader_rejects_truncated_files() {
        let mut reader = Cursor::new("3\ncomment\nC 0 0 0\n");
        let err = XyzFile::new().read_from(&mut reader).unwrap_err();
        assert!(matches!(err, XyzError::MissingRecord(_)));
    }

    #[test]
    fn oversized_count_reports_the_missing_atoms() {
        let mut reader = Cursor::new("18446744073709551615\ncomment\nC 0 0 0\n");
        let err = XyzFile::new().read_from(&mut reader).unwrap_err();
        assert!(matches!(err, XyzError::MissingRecord(ref what) if what.starts_with("atom 2 of")));
    }

    #[test]
    fn reader_reports_bad_coordinates_with_line_number() {
        let mut reader = Cursor::new("1\ncomment\nC 0.0 y 0.0\n");
        let err = XyzFile::new().read_from(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 3,
                kind: XyzParseErrorKind::InvalidFloat { axis: 'y', .. }
            }
        ));
    }

    #[test]
    fn reader_rejects_non_numeric_count() {
        let mut reader = Cursor::new("three\ncomment\n");
        let err = XyzFile::new().read_from(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidCount(_)
            }
        ));
    }
}
