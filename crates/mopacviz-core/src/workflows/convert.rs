use crate::core::io::charges::{ChargeTable, ChargeTableError};
use crate::core::io::traits::{StructureWriter, WriteOutcome};
use crate::core::io::viewer::{ViewerDocument, ViewerError};
use crate::core::io::xyz::{XyzError, XyzFile};
use crate::core::mopac::error::ExtractError;
use crate::core::mopac::{Extraction, Extractor};
use crate::workflows::config::ConvertConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Coordinates,
    Viewer,
    ChargeTable,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Coordinates => write!(f, "XYZ coordinate file"),
            OutputKind::Viewer => write!(f, "3D viewer document"),
            OutputKind::ChargeTable => write!(f, "charge table"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Xyz(#[from] XyzError),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
    #[error(transparent)]
    ChargeTable(#[from] ChargeTableError),
}

#[derive(Debug)]
pub struct OutputReport {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub result: Result<WriteOutcome, WriteError>,
}

impl OutputReport {
    pub fn is_written(&self) -> bool {
        matches!(self.result, Ok(WriteOutcome::Written(_)))
    }
}

/// Everything a conversion run produced.
#[derive(Debug)]
pub struct ConversionReport {
    pub extraction: Extraction,
    /// One entry per attempted output, in the order they were attempted.
    pub outputs: Vec<OutputReport>,
}

impl ConversionReport {
    pub fn output(&self, kind: OutputKind) -> Option<&OutputReport> {
        self.outputs.iter().find(|o| o.kind == kind)
    }

    /// Returns `true` if the coordinate file was written, the minimum for a
    /// successful run.
    pub fn coordinates_written(&self) -> bool {
        self.output(OutputKind::Coordinates)
            .is_some_and(OutputReport::is_written)
    }

    pub fn failures(&self) -> impl Iterator<Item = &OutputReport> {
        self.outputs.iter().filter(|o| o.result.is_err())
    }
}

/// Runs the full pipeline: extraction from the configured input, then every
/// configured output.
///
/// # Errors
///
/// Returns an [`ExtractError`] if the input cannot be read or a required table
/// is missing. No output is written in that case. Write failures do not abort
/// the run; they are recorded in the returned report.
#[instrument(skip_all, name = "conversion_workflow")]
pub fn run(config: &ConvertConfig) -> Result<ConversionReport, ExtractError> {
    info!("Extracting structure from {:?}", &config.input_path);
    let extraction = Extractor::new().extract_path(&config.input_path)?;
    Ok(write_outputs(extraction, config))
}

/// Writes every configured output for an existing extraction.
pub fn write_outputs(extraction: Extraction, config: &ConvertConfig) -> ConversionReport {
    let molecule = &extraction.molecule;
    let mut outputs = Vec::with_capacity(3);

    let xyz = XyzFile::with_comment(&config.output.xyz_comment);
    outputs.push(write_one(
        OutputKind::Coordinates,
        &config.output.xyz_path,
        |path| xyz.write_to_path(molecule, path),
    ));

    if let Some(path) = &config.output.html_path {
        let document = ViewerDocument::new(config.viewer.clone());
        outputs.push(write_one(OutputKind::Viewer, path, |path| {
            document.write_to_path(molecule, path)
        }));
    }

    if let Some(path) = &config.output.csv_path {
        outputs.push(write_one(OutputKind::ChargeTable, path, |path| {
            ChargeTable.write_to_path(molecule, path)
        }));
    }

    ConversionReport {
        extraction,
        outputs,
    }
}

fn write_one<E: Into<WriteError>>(
    kind: OutputKind,
    path: &Path,
    write: impl FnOnce(&Path) -> Result<WriteOutcome, E>,
) -> OutputReport {
    let result = write(path).map_err(Into::into);
    match &result {
        Ok(WriteOutcome::Written(p)) => info!("Wrote {} to {:?}", kind, p),
        Ok(WriteOutcome::Skipped) => warn!("No atoms available; {} was not written.", kind),
        Err(e) => error!("Failed to write {} to {:?}: {}", kind, path, e),
    }
    OutputReport {
        kind,
        path: path.to_path_buf(),
        result,
    }
}
