//! Provides input/output functionality for the conversion artifacts.
//!
//! Every output format implements [`traits::StructureWriter`]; the XYZ format also
//! implements [`traits::StructureReader`] so that written files can be loaded back.

pub mod charges;
pub(crate) mod escape;
pub mod traits;
pub mod viewer;
pub mod xyz;
