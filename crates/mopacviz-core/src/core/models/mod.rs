//! Data structures describing the extracted structure.

pub mod atom;
pub mod molecule;
