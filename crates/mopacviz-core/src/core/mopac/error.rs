use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two tables the extractor requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The final optimized Cartesian geometry table.
    FinalGeometry,
    /// The "MULLIKEN POPULATIONS AND CHARGES" table.
    MullikenCharges,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::FinalGeometry => write!(f, "final optimized geometry"),
            Section::MullikenCharges => write!(f, "Mulliken populations and charges"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Input file '{}' was not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Required section missing: {section} table could not be located")]
    SectionMissing { section: Section },
}
