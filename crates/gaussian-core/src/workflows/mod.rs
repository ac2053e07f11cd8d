//! # Workflows Module
//!
//! The two capabilities a host calls around one run of the external program.
//!
//! - **Composition** ([`compose`]) - Validates the linked inputs, writes the
//!   input deck into the working area and declares what to run and retrieve.
//! - **Parsing** ([`parse`]) - Locates the retrieved output files and scans the
//!   log into `parameters` and `structures` mappings.
//!
//! Each call is stateless; nothing is cached between invocations.

pub mod compose;
pub mod parse;
