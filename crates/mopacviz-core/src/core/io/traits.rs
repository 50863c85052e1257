use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The result of asking a writer to produce a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written to the contained path.
    Written(PathBuf),
    /// The molecule was empty, so no file was created.
    Skipped,
}

/// Defines the interface for serializing a molecule into an output format.
pub trait StructureWriter {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a molecule to a writer.
    ///
    /// An empty molecule writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(&self, molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a molecule to a file path.
    ///
    /// The document is rendered completely in memory before the file is created,
    /// so a failure while rendering never touches the destination. If writing
    /// the rendered bytes fails, the partially written file is removed. Empty
    /// molecules produce no file at all.
    ///
    /// # Return
    ///
    /// Returns [`WriteOutcome::Written`] with the path, or [`WriteOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    fn write_to_path<P: AsRef<Path>>(
        &self,
        molecule: &Molecule,
        path: P,
    ) -> Result<WriteOutcome, Self::Error> {
        let path = path.as_ref();
        if molecule.is_empty() {
            debug!("No atoms to write; skipping {:?}", path);
            return Ok(WriteOutcome::Skipped);
        }
        let mut buffer = Vec::new();
        self.write_to(molecule, &mut buffer)?;
        create_complete(path, |file| file.write_all(&buffer))?;
        Ok(WriteOutcome::Written(path.to_path_buf()))
    }
}

/// Creates `path` and fills it, removing the file again if filling fails.
pub(crate) fn create_complete(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    let result = fill(&mut file).and_then(|()| file.sync_all());
    if let Err(e) = result {
        drop(file);
        if let Err(cleanup) = std::fs::remove_file(path) {
            warn!("Could not remove incomplete file {:?}: {}", path, cleanup);
        }
        return Err(e);
    }
    Ok(())
}

/// Defines the interface for loading a molecule from an input format.
pub trait StructureReader {
    type Error: Error + From<io::Error>;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Molecule, Self::Error>;

    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Molecule, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
