use super::nodes::NodeKind;
use crate::core::io::gaussian_log::LogScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Missing required input: no {0} is specified for this calculation")]
    MissingInput(&'static str),

    #[error("Input '{link}' must be a {expected}, got a {found}")]
    TypeInvalid {
        link: String,
        expected: NodeKind,
        found: NodeKind,
    },

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output scan failed: {source}")]
    Scan {
        #[from]
        source: LogScanError,
    },
}
