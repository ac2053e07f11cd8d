use crate::core::io::traits::OutputLog;
use regex::Regex;
use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::sync::LazyLock;
use thiserror::Error;

pub const ENERGY_KEY: &str = "energy";
pub const DIPOLE_MOMENT_KEY: &str = "dipole moment";
pub const HOMO_KEY: &str = "HOMO (alpha/beta)";
pub const LUMO_KEY: &str = "LUMO (alpha/beta)";
pub const GEOMETRY_OPTIMIZATION_KEY: &str = "Geometry Optimization";

const SCF_DONE_MARKER: &str = "SCF Done:";
const DIPOLE_MARKER: &str = "Dipole moment (field-independent basis, Debye):";
const VIRTUAL_MARKER: &str = "-- Virtual --";

// 0-based token index of the energy on an `SCF Done:` line.
const SCF_ENERGY_TOKEN: usize = 4;
// Offsets of the HOMO and LUMO lines relative to the `-- Virtual --` line.
const HOMO_LINE_OFFSET: isize = -2;
const LUMO_LINE_OFFSET: isize = 1;

static GEOMETRY_OPTIMIZATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*\*\s*GEOMETRY OPTIMIZATION").expect("marker pattern is valid")
});
static OPTIMIZATION_CYCLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Optimization Cycle:\s+(\d+)\s*$").expect("cycle pattern is valid")
});
static GEOMETRY_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)ATOM\s+X\s+Y\s+Z(.*?)Point Group:").expect("block pattern is valid")
});

#[derive(Debug, Error)]
pub enum LogScanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed output on line {line}: {kind}")]
    Malformed {
        line: usize,
        kind: MalformedLineKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedLineKind {
    #[error("'{marker}' expects whitespace-separated token #{position}")]
    MissingToken {
        marker: &'static str,
        position: usize,
    },
    #[error("'{marker}' expects at least one whitespace-separated token")]
    MissingLastToken { marker: &'static str },
    #[error("'{marker}' expects a line at offset {offset}")]
    MissingNeighbor { marker: &'static str, offset: isize },
}

/// Where the scanner is in the output. Once geometry optimisation starts the
/// scanner never returns to the SCF state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Scf,
    GeometryOptimization,
}

/// A scalar or cumulative entry of the `parameters` result mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Text(String),
    List(Vec<String>),
}

pub type ResultParameters = BTreeMap<String, ResultValue>;
pub type ResultStructures = BTreeMap<String, String>;

/// Everything the scanner extracted from one output log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    /// The state the scanner ended in.
    pub state: ScanState,
    /// Energy token of the last `SCF Done:` line seen in the SCF state.
    pub energy: Option<String>,
    /// The line following the last dipole-moment header, verbatim.
    pub dipole_moment: Option<String>,
    /// One entry per orbital block, in file order.
    pub homo: Vec<String>,
    pub lumo: Vec<String>,
    /// Identifier of the last `Optimization Cycle:` line. Not part of
    /// [`ScanReport::parameters`].
    pub optimization_step: Option<String>,
    /// Concatenated coordinate excerpts; present only after geometry
    /// optimisation was entered.
    pub geometry_optimization: Option<String>,
}

impl ScanReport {
    /// The `parameters` result mapping.
    ///
    /// The HOMO and LUMO lists are always present, possibly empty.
    pub fn parameters(&self) -> ResultParameters {
        let mut parameters = ResultParameters::new();
        if let Some(energy) = &self.energy {
            parameters.insert(ENERGY_KEY.to_string(), ResultValue::Text(energy.clone()));
        }
        if let Some(dipole) = &self.dipole_moment {
            parameters.insert(
                DIPOLE_MOMENT_KEY.to_string(),
                ResultValue::Text(dipole.clone()),
            );
        }
        parameters.insert(HOMO_KEY.to_string(), ResultValue::List(self.homo.clone()));
        parameters.insert(LUMO_KEY.to_string(), ResultValue::List(self.lumo.clone()));
        parameters
    }

    /// The `structures` result mapping.
    pub fn structures(&self) -> ResultStructures {
        let mut structures = ResultStructures::new();
        if let Some(block) = &self.geometry_optimization {
            structures.insert(GEOMETRY_OPTIMIZATION_KEY.to_string(), block.clone());
        }
        structures
    }
}

/// The program's text output log.
pub struct GaussianLogFile;

impl OutputLog for GaussianLogFile {
    type Report = ScanReport;
    type Error = LogScanError;

    fn scan_from(reader: &mut impl BufRead) -> Result<Self::Report, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::scan_str(&content)
    }
}

impl GaussianLogFile {
    /// Scans a complete log held in memory.
    pub fn scan_str(content: &str) -> Result<ScanReport, LogScanError> {
        let lines: Vec<&str> = content.lines().collect();
        let mut report = ScanReport::default();

        for (idx, line) in lines.iter().enumerate() {
            match report.state {
                ScanState::Scf => {
                    if GEOMETRY_OPTIMIZATION_RE.is_match(line) {
                        report.state = ScanState::GeometryOptimization;
                    } else if line.contains(SCF_DONE_MARKER) {
                        let energy = token(line, idx, SCF_DONE_MARKER, SCF_ENERGY_TOKEN)?;
                        report.energy = Some(energy.to_string());
                    } else if line.contains(DIPOLE_MARKER) {
                        let (_, next) = neighbor(&lines, idx, DIPOLE_MARKER, 1)?;
                        report.dipole_moment = Some(next.to_string());
                    } else if line.contains(VIRTUAL_MARKER) {
                        let (homo_idx, homo_line) =
                            neighbor(&lines, idx, VIRTUAL_MARKER, HOMO_LINE_OFFSET)?;
                        let (lumo_idx, lumo_line) =
                            neighbor(&lines, idx, VIRTUAL_MARKER, LUMO_LINE_OFFSET)?;
                        let homo = last_token(homo_line, homo_idx, VIRTUAL_MARKER)?;
                        let lumo = token(lumo_line, lumo_idx, VIRTUAL_MARKER, 0)?;
                        report.homo.push(homo.to_string());
                        report.lumo.push(lumo.to_string());
                    }
                }
                ScanState::GeometryOptimization => {
                    if let Some(caps) = OPTIMIZATION_CYCLE_RE.captures(line) {
                        report.optimization_step = Some(caps[1].to_string());
                    }
                }
            }
        }

        if report.state == ScanState::GeometryOptimization {
            let block: String = GEOMETRY_BLOCK_RE
                .captures_iter(content)
                .map(|caps| caps[1].to_string())
                .collect();
            report.geometry_optimization = Some(block);
        }

        Ok(report)
    }
}

fn token<'a>(
    line: &'a str,
    idx: usize,
    marker: &'static str,
    position: usize,
) -> Result<&'a str, LogScanError> {
    line.split_whitespace()
        .nth(position)
        .ok_or(LogScanError::Malformed {
            line: idx + 1,
            kind: MalformedLineKind::MissingToken { marker, position },
        })
}

fn last_token<'a>(line: &'a str, idx: usize, marker: &'static str) -> Result<&'a str, LogScanError> {
    line.split_whitespace()
        .last()
        .ok_or(LogScanError::Malformed {
            line: idx + 1,
            kind: MalformedLineKind::MissingLastToken { marker },
        })
}

fn neighbor<'a>(
    lines: &[&'a str],
    idx: usize,
    marker: &'static str,
    offset: isize,
) -> Result<(usize, &'a str), LogScanError> {
    idx.checked_add_signed(offset)
        .and_then(|target| lines.get(target).map(|line| (target, *line)))
        .ok_or(LogScanError::Malformed {
            line: idx + 1,
            kind: MalformedLineKind::MissingNeighbor { marker, offset },
        })
}
