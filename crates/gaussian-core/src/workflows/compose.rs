use crate::core::io::gaussian_input::GaussianInputFile;
use crate::core::io::traits::InputDeck;
use crate::core::models::options::CalculationOptions;
use crate::core::models::params::ParameterSet;
use crate::engine::calcinfo::{CalcInfo, CodeInfo};
use crate::engine::error::PluginError;
use crate::engine::nodes::{
    CODE_LINK, DataNode, InputLink, NodeKind, NodeMap, PARAMETERS_LINK, STRUCTURE_LINK,
};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Turns linked host inputs into a prepared working area.
pub trait Composer {
    /// Writes the input deck into `working_dir` and describes the run.
    ///
    /// Recognised nodes are removed from `inputs`; the rest are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::MissingInput`] when the structure or code is not
    /// linked, [`PluginError::TypeInvalid`] when a link holds the wrong kind of
    /// node, and [`PluginError::Io`] when the deck cannot be written.
    fn prepare_for_submission(
        &self,
        working_dir: &Path,
        inputs: NodeMap,
    ) -> Result<CalcInfo, PluginError>;
}

/// A Gaussian calculation built from a structure and a flat parameter set.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianCalculation;

impl GaussianCalculation {
    pub const DEFAULT_INPUT_FILE: &'static str = "aiida.com";
    pub const DEFAULT_OUTPUT_FILE: &'static str = "aiida.log";
    pub const DEFAULT_ERROR_FILE: &'static str = "aiida.err";

    /// The input links this calculation accepts besides the code.
    pub fn input_links() -> Vec<InputLink> {
        vec![
            InputLink {
                link_name: STRUCTURE_LINK,
                valid_type: NodeKind::Structure,
                docstring: "A structure to be processed",
            },
            InputLink {
                link_name: PARAMETERS_LINK,
                valid_type: NodeKind::Parameters,
                docstring: "Parameters used to describe the calculation",
            },
        ]
    }
}

fn type_invalid(link: &str, expected: NodeKind, found: &DataNode) -> PluginError {
    PluginError::TypeInvalid {
        link: link.to_string(),
        expected,
        found: found.kind(),
    }
}

impl Composer for GaussianCalculation {
    #[instrument(skip_all, name = "gaussian_compose")]
    fn prepare_for_submission(
        &self,
        working_dir: &Path,
        mut inputs: NodeMap,
    ) -> Result<CalcInfo, PluginError> {
        let structure = match inputs.remove(STRUCTURE_LINK) {
            Some(DataNode::Structure(structure)) => structure,
            Some(other) => return Err(type_invalid(STRUCTURE_LINK, NodeKind::Structure, &other)),
            None => return Err(PluginError::MissingInput(STRUCTURE_LINK)),
        };

        let code = match inputs.remove(CODE_LINK) {
            Some(DataNode::Code(code)) => code,
            Some(other) => return Err(type_invalid(CODE_LINK, NodeKind::Code, &other)),
            None => return Err(PluginError::MissingInput(CODE_LINK)),
        };

        let parameters = match inputs.remove(PARAMETERS_LINK) {
            Some(DataNode::Parameters(parameters)) => parameters,
            Some(other) => {
                return Err(type_invalid(PARAMETERS_LINK, NodeKind::Parameters, &other));
            }
            None => ParameterSet::new(),
        };

        if structure.is_empty() {
            warn!("Structure has no atoms; the input deck will carry no coordinates.");
        }
        if parameters.is_empty() {
            debug!("No parameters supplied; every option takes its default.");
        } else {
            debug!(num_parameters = parameters.len(), "Resolving calculation options.");
        }
        for key in CalculationOptions::unrecognized_keys(&parameters) {
            debug!(key = %key, "Ignoring unrecognized calculation option.");
        }
        let options = CalculationOptions::from_parameters(&parameters);

        let input_path = working_dir.join(Self::DEFAULT_INPUT_FILE);
        GaussianInputFile::write_to_path(&structure, &options, &input_path)?;
        info!(
            num_atoms = structure.len(),
            path = %input_path.display(),
            "Input deck written."
        );

        let code_info = CodeInfo {
            cmdline_params: Vec::new(),
            stdin_name: Self::DEFAULT_INPUT_FILE.to_string(),
            stdout_name: Self::DEFAULT_OUTPUT_FILE.to_string(),
            stderr_name: Self::DEFAULT_ERROR_FILE.to_string(),
            code,
        };

        Ok(CalcInfo {
            codes_info: vec![code_info],
            retrieve_list: vec![
                Self::DEFAULT_OUTPUT_FILE.to_string(),
                Self::DEFAULT_ERROR_FILE.to_string(),
            ],
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::structure::Structure;
    use crate::engine::nodes::CodeRef;
    use nalgebra::Point3;
    use std::fs;
    use tempfile::tempdir;

    fn methane() -> Structure {
        let mut builder = Structure::builder();
        builder
            .add_atom("C", Point3::new(0.0, 0.0, 0.0))
            .add_atom("H", Point3::new(0.629, 0.629, 0.629))
            .add_atom("H", Point3::new(-0.629, -0.629, 0.629))
            .add_atom("H", Point3::new(-0.629, 0.629, -0.629))
            .add_atom("H", Point3::new(0.629, -0.629, -0.629));
        builder.build()
    }

    fn inputs(parameters: Option<ParameterSet>) -> NodeMap {
        let mut nodes = NodeMap::new();
        nodes.insert(STRUCTURE_LINK.into(), DataNode::Structure(methane()));
        nodes.insert(CODE_LINK.into(), DataNode::Code(CodeRef::new("g16@localhost")));
        if let Some(parameters) = parameters {
            nodes.insert(PARAMETERS_LINK.into(), DataNode::Parameters(parameters));
        }
        nodes
    }

    fn read_deck(dir: &Path) -> String {
        fs::read_to_string(dir.join(GaussianCalculation::DEFAULT_INPUT_FILE)).unwrap()
    }

    #[test]
    fn absent_parameters_produce_default_deck() {
        let dir = tempdir().unwrap();
        GaussianCalculation
            .prepare_for_submission(dir.path(), inputs(None))
            .unwrap();

        let deck = read_deck(dir.path());
        let lines: Vec<&str> = deck.lines().collect();
        assert_eq!(lines[0], "%Mem=7500mb");
        assert_eq!(lines[1], "#p RHF/6-31G SP Integral(Grid=UltraFine)");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "A generic title");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "0 1");
        assert_eq!(lines[6], "C 0.0 0.0 0.0");
        assert_eq!(lines[10], "H 0.629 -0.629 -0.629");
        assert_eq!(lines.len(), 12);
        assert!(deck.ends_with("\n\n"));
    }

    #[test]
    fn supplied_parameters_are_matched_in_any_casing() {
        let dir = tempdir().unwrap();
        let mut parameters = ParameterSet::new();
        parameters
            .insert("mem_total", 2000_i64)
            .insert("Method", "B3LYP")
            .insert("basis", "cc-pVDZ")
            .insert("job_type", "OPT")
            .insert("title", "methane opt")
            .insert("charge", 1_i64)
            .insert("Multiplicity", 2_i64)
            .insert("unrestricted", "U")
            .insert("dft_d", "GD3BJ");

        GaussianCalculation
            .prepare_for_submission(dir.path(), inputs(Some(parameters)))
            .unwrap();

        let deck = read_deck(dir.path());
        let lines: Vec<&str> = deck.lines().collect();
        assert_eq!(lines[0], "%Mem=2000mb");
        assert_eq!(lines[1], "#p UB3LYP/cc-pVDZ OPT Integral(Grid=UltraFine)");
        assert_eq!(lines[2], "EmpiricalDispersion=GD3BJ");
        assert_eq!(lines[4], "methane opt");
        assert_eq!(lines[6], "1 2");
    }

    #[test]
    fn calc_info_declares_files_and_code() {
        let dir = tempdir().unwrap();
        let calc_info = GaussianCalculation
            .prepare_for_submission(dir.path(), inputs(None))
            .unwrap();

        assert_eq!(calc_info.retrieve_list, vec!["aiida.log", "aiida.err"]);
        assert!(calc_info.local_copy_list.is_empty());
        assert!(calc_info.remote_copy_list.is_empty());
        assert!(calc_info.retrieve_singlefile_list.is_empty());

        let code_info = &calc_info.codes_info[0];
        assert!(code_info.cmdline_params.is_empty());
        assert_eq!(code_info.stdin_name, "aiida.com");
        assert_eq!(code_info.stdout_name, "aiida.log");
        assert_eq!(code_info.stderr_name, "aiida.err");
        assert_eq!(code_info.code, CodeRef::new("g16@localhost"));
    }

    #[test]
    fn missing_structure_is_rejected() {
        let dir = tempdir().unwrap();
        let mut nodes = inputs(None);
        nodes.remove(STRUCTURE_LINK);

        let result = GaussianCalculation.prepare_for_submission(dir.path(), nodes);
        assert!(matches!(result, Err(PluginError::MissingInput("structure"))));
        assert!(!dir.path().join("aiida.com").exists());
    }

    #[test]
    fn missing_code_is_rejected() {
        let dir = tempdir().unwrap();
        let mut nodes = inputs(None);
        nodes.remove(CODE_LINK);

        let result = GaussianCalculation.prepare_for_submission(dir.path(), nodes);
        assert!(matches!(result, Err(PluginError::MissingInput("code"))));
    }

    #[test]
    fn structure_of_wrong_kind_is_rejected() {
        let dir = tempdir().unwrap();
        let mut nodes = inputs(None);
        nodes.insert(
            STRUCTURE_LINK.into(),
            DataNode::Parameters(ParameterSet::new()),
        );

        let result = GaussianCalculation.prepare_for_submission(dir.path(), nodes);
        match result {
            Err(PluginError::TypeInvalid {
                link,
                expected,
                found,
            }) => {
                assert_eq!(link, "structure");
                assert_eq!(expected, NodeKind::Structure);
                assert_eq!(found, NodeKind::Parameters);
            }
            other => panic!("expected TypeInvalid, got {:?}", other),
        }
    }

    #[test]
    fn parameters_of_wrong_kind_are_rejected() {
        let dir = tempdir().unwrap();
        let mut nodes = inputs(None);
        nodes.insert(PARAMETERS_LINK.into(), DataNode::Structure(methane()));

        let result = GaussianCalculation.prepare_for_submission(dir.path(), nodes);
        assert!(matches!(
            result,
            Err(PluginError::TypeInvalid {
                expected: NodeKind::Parameters,
                ..
            })
        ));
    }

    #[test]
    fn unwritable_working_dir_is_an_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = GaussianCalculation.prepare_for_submission(&missing, inputs(None));
        assert!(matches!(result, Err(PluginError::Io(_))));
    }

    #[test]
    fn empty_structure_still_composes() {
        let dir = tempdir().unwrap();
        let mut nodes = inputs(None);
        nodes.insert(STRUCTURE_LINK.into(), DataNode::Structure(Structure::new()));

        GaussianCalculation
            .prepare_for_submission(dir.path(), nodes)
            .unwrap();

        let deck = read_deck(dir.path());
        assert!(deck.ends_with("0 1\n\n"));
    }

    #[test]
    fn input_links_cover_structure_and_parameters() {
        let links = GaussianCalculation::input_links();
        let names: Vec<_> = links.iter().map(|l| l.link_name).collect();
        assert_eq!(names, vec!["structure", "parameters"]);
        assert_eq!(links[0].valid_type, NodeKind::Structure);
        assert_eq!(links[1].valid_type, NodeKind::Parameters);
    }
}
