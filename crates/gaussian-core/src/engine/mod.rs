//! # Engine Module
//!
//! Value types that make up the contract with the host orchestration system.
//!
//! - **Input nodes** ([`nodes`]) - Typed values the host links into a calculation.
//! - **Calculation info** ([`calcinfo`]) - What to run and which files to retrieve.
//! - **Retrieved files** ([`retrieved`]) - The folder of files brought back after a run.
//! - **Errors** ([`error`]) - Failures surfaced to the host.

pub mod calcinfo;
pub mod error;
pub mod nodes;
pub mod retrieved;
