use super::retrieved::RetrievedFolder;
use crate::core::models::params::ParameterSet;
use crate::core::models::structure::Structure;
use std::collections::BTreeMap;
use std::fmt;

pub const STRUCTURE_LINK: &str = "structure";
pub const PARAMETERS_LINK: &str = "parameters";
pub const CODE_LINK: &str = "code";
pub const RETRIEVED_LINK: &str = "retrieved";

/// A reference to the external program the host will execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRef {
    /// Host identifier of the code (label, UUID or path; opaque to us).
    pub label: String,
}

impl CodeRef {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Structure,
    Parameters,
    Code,
    Folder,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structure => "structure",
            Self::Parameters => "parameter set",
            Self::Code => "code",
            Self::Folder => "folder",
        };
        f.write_str(name)
    }
}

/// A value linked into a calculation by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DataNode {
    Structure(Structure),
    Parameters(ParameterSet),
    Code(CodeRef),
    Folder(RetrievedFolder),
}

impl DataNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Structure(_) => NodeKind::Structure,
            Self::Parameters(_) => NodeKind::Parameters,
            Self::Code(_) => NodeKind::Code,
            Self::Folder(_) => NodeKind::Folder,
        }
    }
}

/// Host-provided nodes keyed by link name.
pub type NodeMap = BTreeMap<String, DataNode>;

/// Describes one input link a calculation accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLink {
    pub link_name: &'static str,
    pub valid_type: NodeKind,
    pub docstring: &'static str,
}
