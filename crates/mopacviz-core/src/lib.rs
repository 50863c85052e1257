//! # mopacviz Core Library
//!
//! Extracts the final optimized geometry and Mulliken charges from MOPAC output
//! files and turns them into downstream artifacts: a plain XYZ coordinate file,
//! a self-contained 3Dmol.js viewer document, and an optional CSV charge table.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict two-layer split:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `AtomRecord`),
//!   the MOPAC output extractor, and the writers for every output format.
//!
//! - **[`workflows`]: The Public API.** Ties extraction and emission together into a
//!   single conversion run with per-output reporting.

pub mod core;
pub mod workflows;
