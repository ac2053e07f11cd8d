//! Data models for the structures and parameters handed over by the host.

pub mod atom;
pub mod options;
pub mod params;
pub mod structure;
