//! # Workflows Module
//!
//! High-level entry points that run the whole conversion pipeline.
//!
//! - **Conversion Workflow** ([`convert`]) - Extraction followed by every configured output.
//! - **Configuration** ([`config`]) - Output paths and presentation settings for a run.
//!
//! Section-level extraction failures abort a run before anything is written.
//! Each output is attempted independently, so a failure writing one file never
//! prevents the others from being produced.

pub mod config;
pub mod convert;
