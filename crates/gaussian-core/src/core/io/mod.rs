//! Provides input/output functionality for the external program's file formats.
//!
//! The input deck is write-only and the output log is read-only, so the two
//! directions are described by separate traits in [`traits`].

pub mod gaussian_input;
pub mod gaussian_log;
pub mod traits;
