//! # Core Module
//!
//! Fundamental building blocks of the conversion pipeline.
//!
//! - **Molecular Representation** ([`models`]) - Atom records and the ordered molecule
//! - **Extraction** ([`mopac`]) - Locating and parsing the geometry and Mulliken tables
//! - **File I/O** ([`io`]) - XYZ, viewer document, and charge table emission
//!
//! Data flows strictly one way: the extractor builds a [`models::molecule::Molecule`]
//! once, and every writer only borrows it.

pub mod io;
pub mod models;
pub mod mopac;
