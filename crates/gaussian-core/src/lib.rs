//! # Gaussian Plugin Core Library
//!
//! Adapters that let a workflow engine drive a Gaussian-style quantum-chemistry
//! program: one side serializes a molecular structure and a flat set of
//! calculation options into the program's input deck, the other scans the
//! program's text output back into key/value results.
//!
//! ## Architectural Philosophy
//!
//! The library follows the same three-layer split used across our tooling:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`,
//!   `ParameterSet`) and the file formats themselves (`gaussian_input`,
//!   `gaussian_log`).
//!
//! - **[`engine`]: The Host Contract.** Value types exchanged with the host
//!   orchestration system (input nodes, calculation info, retrieved folders),
//!   the resolved calculation options with their defaults, and the error type.
//!
//! - **[`workflows`]: The Public API.** The two capabilities a host calls:
//!   [`workflows::compose::Composer`] before the job runs and
//!   [`workflows::parse::Scanner`] after its files were retrieved.
//!
//! Scheduling, remote execution, retries and provenance are the host's job.

pub mod core;
pub mod engine;
pub mod workflows;
