use super::error::Section;
use crate::core::models::atom::AtomRecord;
use nalgebra::Point3;
use std::fmt;

/// Whitespace-separated field positions of a geometry table row.
///
/// MOPAC prints Cartesian rows as
/// `index, symbol, x, flag, y, flag, z, flag`, where each flag marks whether the
/// preceding coordinate was optimized. Only the value slots are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryColumns {
    pub symbol: usize,
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub min_fields: usize,
}

impl GeometryColumns {
    pub const MOPAC: Self = Self {
        symbol: 1,
        x: 2,
        y: 4,
        z: 6,
        min_fields: 8,
    };
}

impl Default for GeometryColumns {
    fn default() -> Self {
        Self::MOPAC
    }
}

/// Whitespace-separated field positions of a Mulliken table row
/// (`number, symbol, population, charge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeColumns {
    pub charge: usize,
    pub min_fields: usize,
}

impl ChargeColumns {
    pub const MOPAC: Self = Self {
        charge: 3,
        min_fields: 4,
    };
}

impl Default for ChargeColumns {
    fn default() -> Self {
        Self::MOPAC
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields { found: usize, required: usize },
    /// The column layout names a field the row does not have.
    MissingField { field: usize },
    InvalidNumber { field: usize, value: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found, required } => {
                write!(f, "expected at least {required} fields, found {found}")
            }
            SkipReason::MissingField { field } => write!(f, "field {field} is missing"),
            SkipReason::InvalidNumber { field, value } => {
                write!(f, "field {field} is not a number (value: '{value}')")
            }
        }
    }
}

/// A table row that was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub section: Section,
    /// 1-based row number within the captured block.
    pub row: usize,
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable<T> {
    pub values: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

impl<T> Default for ParsedTable<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, SkipReason> {
    fields
        .get(index)
        .copied()
        .ok_or(SkipReason::MissingField { field: index })
}

fn parse_field(fields: &[&str], index: usize) -> Result<f64, SkipReason> {
    let value = field(fields, index)?;
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(SkipReason::InvalidNumber {
            field: index,
            value: value.to_string(),
        }),
    }
}

fn check_width(fields: &[&str], required: usize) -> Result<(), SkipReason> {
    if fields.len() < required {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
            required,
        });
    }
    Ok(())
}

/// Table rows start with an integer atom index. Anything else in a captured
/// block (blank lines, column headers, energy summaries) is surrounding text.
fn is_table_row(fields: &[&str]) -> bool {
    fields
        .first()
        .is_some_and(|first| first.parse::<usize>().is_ok())
}

fn parse_rows<T>(
    block: &str,
    section: Section,
    mut parse_row: impl FnMut(&[&str]) -> Result<T, SkipReason>,
) -> ParsedTable<T> {
    let mut table = ParsedTable::default();
    for (row, line) in block.trim().lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if !is_table_row(&fields) {
            continue;
        }
        match parse_row(&fields) {
            Ok(value) => table.values.push(value),
            Err(reason) => table.skipped.push(SkippedRow {
                section,
                row: row + 1,
                content: line.trim().to_string(),
                reason,
            }),
        }
    }
    table
}

/// Parses the rows of a geometry block into atoms, preserving row order.
///
/// Lines that do not start with an atom index are ignored. Rows that are too
/// short or carry non-numeric coordinates are reported in [`ParsedTable::skipped`].
pub fn parse_geometry_block(block: &str, columns: &GeometryColumns) -> ParsedTable<AtomRecord> {
    parse_rows(block, Section::FinalGeometry, |fields| {
        check_width(fields, columns.min_fields)?;
        let x = parse_field(fields, columns.x)?;
        let y = parse_field(fields, columns.y)?;
        let z = parse_field(fields, columns.z)?;
        Ok(AtomRecord::new(field(fields, columns.symbol)?, Point3::new(x, y, z)))
    })
}

pub fn parse_charge_block(block: &str, columns: &ChargeColumns) -> ParsedTable<f64> {
    parse_rows(block, Section::MullikenCharges, |fields| {
        check_width(fields, columns.min_fields)?;
        parse_field(fields, columns.charge)
    })
}
