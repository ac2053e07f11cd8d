use super::compose::GaussianCalculation;
use crate::core::io::gaussian_log::{GaussianLogFile, ResultParameters, ResultStructures};
use crate::core::io::traits::OutputLog;
use crate::engine::error::PluginError;
use crate::engine::nodes::{DataNode, NodeKind, NodeMap, RETRIEVED_LINK};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, instrument, warn};

/// Turns the files retrieved after a run into result mappings.
pub trait Scanner {
    /// Scans the retrieved files.
    ///
    /// A run that left neither an output nor an error file is reported as an
    /// unsuccessful [`ParseOutcome`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Retrieval`] when the retrieved folder is not
    /// linked or cannot be listed, and [`PluginError::Scan`] when the log
    /// cannot be read or an extraction point is malformed.
    fn parse_with_retrieved(&self, retrieved: &NodeMap) -> Result<ParseOutcome, PluginError>;
}

/// Result of one scan: a success flag plus the `parameters` and `structures`
/// mappings, both always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub success: bool,
    pub parameters: ResultParameters,
    pub structures: ResultStructures,
}

impl ParseOutcome {
    fn unsuccessful() -> Self {
        Self::default()
    }
}

/// Absolute paths of the declared output files that were retrieved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFiles {
    pub output: Option<PathBuf>,
    pub error: Option<PathBuf>,
}

/// Parser for the log written by [`GaussianCalculation`].
#[derive(Debug, Clone)]
pub struct GaussianParser {
    retrieved_link: String,
}

impl Default for GaussianParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GaussianParser {
    pub fn new() -> Self {
        Self {
            retrieved_link: RETRIEVED_LINK.to_string(),
        }
    }

    /// Uses a host-specific link name for the retrieved folder.
    pub fn with_retrieved_link(link: &str) -> Self {
        Self {
            retrieved_link: link.to_string(),
        }
    }

    /// Looks up the standard output and standard error files in the retrieved
    /// folder.
    pub fn fetch_output_files(&self, retrieved: &NodeMap) -> Result<OutputFiles, PluginError> {
        let folder = match retrieved.get(&self.retrieved_link) {
            Some(DataNode::Folder(folder)) => folder,
            Some(other) => {
                return Err(PluginError::TypeInvalid {
                    link: self.retrieved_link.clone(),
                    expected: NodeKind::Folder,
                    found: other.kind(),
                });
            }
            None => return Err(PluginError::Retrieval("No retrieved folder found".into())),
        };

        let files = folder.list_files().map_err(|e| {
            PluginError::Retrieval(format!(
                "Cannot list retrieved folder '{}': {}",
                folder.root().display(),
                e
            ))
        })?;
        let find = |name: &str| {
            files
                .iter()
                .any(|file| file == name)
                .then(|| folder.abs_path(name))
        };

        Ok(OutputFiles {
            output: find(GaussianCalculation::DEFAULT_OUTPUT_FILE),
            error: find(GaussianCalculation::DEFAULT_ERROR_FILE),
        })
    }
}

impl Scanner for GaussianParser {
    #[instrument(skip_all, name = "gaussian_parse")]
    fn parse_with_retrieved(&self, retrieved: &NodeMap) -> Result<ParseOutcome, PluginError> {
        let files = self.fetch_output_files(retrieved)?;

        if let Some(error_path) = &files.error {
            match fs::metadata(error_path) {
                Ok(meta) if meta.len() > 0 => {
                    warn!(path = %error_path.display(), bytes = meta.len(), "Error file is not empty.");
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(path = %error_path.display(), error = %e, "Cannot inspect error file.");
                }
            }
        }

        let Some(output_path) = files.output else {
            if files.error.is_none() {
                error!("No output files found");
                return Ok(ParseOutcome::unsuccessful());
            }
            warn!("Only the error file was retrieved; there is no log to scan.");
            return Ok(ParseOutcome {
                success: true,
                ..Default::default()
            });
        };

        let report = GaussianLogFile::scan_from_path(&output_path)?;
        info!(
            state = ?report.state,
            orbital_blocks = report.homo.len(),
            "Output log scanned."
        );

        Ok(ParseOutcome {
            success: true,
            parameters: report.parameters(),
            structures: report.structures(),
        })
    }
}
