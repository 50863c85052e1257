//! Extraction of the final geometry and Mulliken charges from MOPAC output.
//!
//! MOPAC writes its results as human-readable text. The extractor locates the
//! final Cartesian geometry table with an ordered cascade of named strategies
//! ([`sections::GEOMETRY_MATCHERS`]), locates the Mulliken table with a single
//! strategy, then parses both blocks row by row using explicit column layouts
//! ([`tables::GeometryColumns`], [`tables::ChargeColumns`]).
//!
//! Both tables are mandatory. Individual malformed rows are dropped and reported,
//! and charges are only attached when they can be matched one-to-one by position.

pub mod error;
pub mod sections;
pub mod tables;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::core::models::molecule::{ChargeCountMismatch, Molecule};
use error::{ExtractError, Section};
use sections::{locate_geometry, locate_mulliken};
use std::borrow::Cow;
use std::path::Path;
use tables::{ChargeColumns, GeometryColumns, SkippedRow, parse_charge_block, parse_geometry_block};
use tracing::{debug, info, instrument, warn};

/// Outcome of matching the Mulliken charges against the parsed atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeAssignment {
    /// Every atom received the charge from the row at the same position.
    Assigned,
    /// The counts differed; no atom carries a charge.
    CountMismatch(ChargeCountMismatch),
}

/// The result of a successful extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The atoms of the final structure, in source table order.
    pub molecule: Molecule,
    /// Name of the geometry strategy that located the table.
    pub geometry_strategy: &'static str,
    pub charges: ChargeAssignment,
    /// Rows of either table that were dropped while parsing.
    pub skipped_rows: Vec<SkippedRow>,
}

impl Extraction {
    pub fn charge_mismatch(&self) -> Option<ChargeCountMismatch> {
        match self.charges {
            ChargeAssignment::Assigned => None,
            ChargeAssignment::CountMismatch(mismatch) => Some(mismatch),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    geometry_columns: GeometryColumns,
    charge_columns: ChargeColumns,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(geometry_columns: GeometryColumns, charge_columns: ChargeColumns) -> Self {
        Self {
            geometry_columns,
            charge_columns,
        }
    }

    /// Extracts the final structure from the text of a MOPAC output file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::SectionMissing`] if either the geometry table or
    /// the Mulliken table cannot be located.
    #[instrument(skip_all, name = "mopac_extract")]
    pub fn extract(&self, text: &str) -> Result<Extraction, ExtractError> {
        let text = normalize_line_endings(text);

        let geometry = locate_geometry(&text).ok_or(ExtractError::SectionMissing {
            section: Section::FinalGeometry,
        })?;
        let mulliken = locate_mulliken(&text).ok_or(ExtractError::SectionMissing {
            section: Section::MullikenCharges,
        })?;

        let atoms = parse_geometry_block(geometry.block, &self.geometry_columns);
        let charges = parse_charge_block(mulliken.block, &self.charge_columns);

        let mut skipped_rows = atoms.skipped;
        skipped_rows.extend(charges.skipped);
        for skipped in &skipped_rows {
            debug!(
                "Skipped {} row {} ('{}'): {}",
                skipped.section, skipped.row, skipped.content, skipped.reason
            );
        }

        let mut molecule = Molecule::from_atoms(atoms.values);
        let assignment = match molecule.assign_charges(&charges.values) {
            Ok(()) => ChargeAssignment::Assigned,
            Err(mismatch) => {
                warn!("Charges will not be assigned: {}.", mismatch);
                ChargeAssignment::CountMismatch(mismatch)
            }
        };

        info!(
            "Extracted {} atoms (geometry strategy '{}', {} rows skipped).",
            molecule.len(),
            geometry.strategy,
            skipped_rows.len()
        );

        Ok(Extraction {
            molecule,
            geometry_strategy: geometry.strategy,
            charges: assignment,
            skipped_rows,
        })
    }

    /// Reads a MOPAC output file and extracts the final structure from it.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InputNotFound`] if the path does not exist,
    /// [`ExtractError::InputRead`] for any other read failure (including invalid
    /// UTF-8), and the errors of [`Extractor::extract`].
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Result<Extraction, ExtractError> {
        let path = path.as_ref();
        debug!("Reading MOPAC output from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExtractError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ExtractError::InputRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        self.extract(&content)
    }
}

pub fn extract_from_str(text: &str) -> Result<Extraction, ExtractError> {
    Extractor::new().extract(text)
}

pub fn extract_from_path<P: AsRef<Path>>(path: P) -> Result<Extraction, ExtractError> {
    Extractor::new().extract_path(path)
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
