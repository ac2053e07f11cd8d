//! # Core Module
//!
//! Stateless building blocks shared by both adapters.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, structures and the flat
//!   parameter mapping supplied by the host.
//! - **File I/O** ([`io`]) - The input deck writer and the output log scanner.

pub mod io;
pub mod models;
