use mopacviz::core::io::traits::WriteOutcome;
use mopacviz::core::mopac::{ChargeAssignment, Extraction};
use mopacviz::workflows::convert::{ConversionReport, OutputKind};
use std::io::{self, Write};

/// Prints the non-fatal notices of an extraction (charge mismatch, skipped rows).
pub fn print_extraction_notices(out: &mut impl Write, extraction: &Extraction) -> io::Result<()> {
    if let ChargeAssignment::CountMismatch(mismatch) = extraction.charges {
        writeln!(
            out,
            "Warning: the number of atoms ({}) and Mulliken charges ({}) differ. Charges will not be assigned.",
            mismatch.atoms, mismatch.charges
        )?;
    }
    if !extraction.skipped_rows.is_empty() {
        writeln!(
            out,
            "Note: {} table row(s) could not be parsed and were skipped (use -vv for details).",
            extraction.skipped_rows.len()
        )?;
    }
    Ok(())
}

pub fn print_conversion_report(out: &mut impl Write, report: &ConversionReport) -> io::Result<()> {
    print_extraction_notices(out, &report.extraction)?;
    for output in &report.outputs {
        match &output.result {
            Ok(WriteOutcome::Written(path)) => {
                writeln!(out, "✓ {} written to: {}", output.kind, path.display())?;
            }
            Ok(WriteOutcome::Skipped) => {
                writeln!(
                    out,
                    "Warning: no atoms were extracted; {} was not written.",
                    output.kind
                )?;
            }
            Err(e) => {
                writeln!(
                    out,
                    "✗ Failed to write {} to {}: {}",
                    output.kind,
                    output.path.display(),
                    e
                )?;
            }
        }
    }
    if let Some(viewer) = report.output(OutputKind::Viewer) {
        if let Ok(WriteOutcome::Written(path)) = &viewer.result {
            writeln!(
                out,
                "Open '{}' in a web browser to view the molecule.",
                path.display()
            )?;
        }
    }
    Ok(())
}

pub fn print_extraction_table(out: &mut impl Write, extraction: &Extraction) -> io::Result<()> {
    let molecule = &extraction.molecule;
    let charges = match extraction.charges {
        ChargeAssignment::Assigned if molecule.has_charges() => "assigned".to_string(),
        ChargeAssignment::Assigned => "none".to_string(),
        ChargeAssignment::CountMismatch(m) => {
            format!("not assigned ({} atoms, {} charges)", m.atoms, m.charges)
        }
    };

    writeln!(out, "Geometry strategy : {}", extraction.geometry_strategy)?;
    writeln!(out, "Atoms             : {}", molecule.len())?;
    writeln!(out, "Mulliken charges  : {}", charges)?;
    writeln!(out, "Skipped rows      : {}", extraction.skipped_rows.len())?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:<6} {:>14} {:>14} {:>14} {:>10}",
        "#", "Symbol", "X (Å)", "Y (Å)", "Z (Å)", "Charge"
    )?;
    for (i, atom) in molecule.iter().enumerate() {
        let charge = atom
            .charge
            .map_or_else(|| "-".to_string(), |c| format!("{:.4}", c));
        writeln!(
            out,
            "{:>5}  {:<6} {:>14.8} {:>14.8} {:>14.8} {:>10}",
            i + 1,
            atom.symbol,
            atom.x(),
            atom.y(),
            atom.z(),
            charge
        )?;
    }
    for skipped in &extraction.skipped_rows {
        writeln!(
            out,
            "  skipped {} row {}: {}",
            skipped.section, skipped.row, skipped.reason
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mopacviz::core::models::molecule::{ChargeCountMismatch, Molecule};
    use nalgebra::Point3;

    fn extraction(charges: ChargeAssignment) -> Extraction {
        let mut molecule = Molecule::new();
        molecule.push("C", Point3::new(0.0, 1.5, -2.0));
        if charges == ChargeAssignment::Assigned {
            molecule.assign_charges(&[-0.25]).unwrap();
        }
        Extraction {
            molecule,
            geometry_strategy: "numbered-header",
            charges,
            skipped_rows: Vec::new(),
        }
    }

    fn render(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn mismatch_notice_is_printed() {
        let e = extraction(ChargeAssignment::CountMismatch(ChargeCountMismatch {
            atoms: 1,
            charges: 2,
        }));
        let text = render(|out| print_extraction_notices(out, &e));
        assert!(text.contains("number of atoms (1) and Mulliken charges (2) differ"));
    }

    #[test]
    fn no_notice_when_charges_are_assigned() {
        let e = extraction(ChargeAssignment::Assigned);
        let text = render(|out| print_extraction_notices(out, &e));
        assert!(text.is_empty());
    }

    #[test]
    fn table_lists_every_atom_with_its_charge() {
        let e = extraction(ChargeAssignment::Assigned);
        let text = render(|out| print_extraction_table(out, &e));

        assert!(text.contains("Geometry strategy : numbered-header"));
        assert!(text.contains("Mulliken charges  : assigned"));
        let row = text.lines().last().unwrap();
        assert!(row.trim_start().starts_with("1  C"));
        assert!(row.contains("1.50000000"));
        assert!(row.contains("-0.2500"));
    }
}
