use super::params::{ParameterSet, normalize_key};
use phf::{Map, phf_map};

/// Recognised option names (normalized) and the value used when the host
/// does not supply one.
pub static OPTION_DEFAULTS: Map<&'static str, &'static str> = phf_map! {
    "CHARGE" => "0",
    "CPUS" => "1",
    "MULTIPLICITY" => "1",
    "BASIS" => "6-31G",
    "JOB_TYPE" => "SP",
    "DFT_D" => "FALSE",
    "MEM_TOTAL" => "7500",
    "METHOD" => "HF",
    "SCF_CONVERGENCE" => "Tight",
    "TITLE" => "A generic title",
    "SCF_MAX_CYCLES" => "50",
    // Pruned grid with 99,590 points.
    "INTEGRAL" => "Integral(Grid=UltraFine)",
    "UNRESTRICTED" => "R",
    "ADD_CELL" => "false",
};

const DISPERSION_DISABLED: &str = "FALSE";

/// The fully resolved set of calculation options.
///
/// Every recognised option has a value here, either taken from the host's
/// parameter set or from [`OPTION_DEFAULTS`]. Values are kept in their
/// rendered form since the input deck substitutes them literally.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOptions {
    pub charge: String,
    pub cpus: String,
    pub multiplicity: String,
    pub basis: String,
    pub job_type: String,
    /// Empirical dispersion keyword; `None` when dispersion is switched off.
    pub dft_d: Option<String>,
    /// Total memory in megabytes.
    pub mem_total: String,
    pub method: String,
    pub scf_convergence: String,
    pub title: String,
    pub scf_max_cycles: String,
    pub integral: String,
    /// Prefix of the method keyword: `R`, `U` or `RO`.
    pub unrestricted: String,
    pub add_cell: bool,
}

impl CalculationOptions {
    /// Resolves every recognised option against a host parameter set.
    ///
    /// Keys are matched after [`normalize_key`]; anything not listed in
    /// [`OPTION_DEFAULTS`] is ignored.
    pub fn from_parameters(parameters: &ParameterSet) -> Self {
        let normalized = parameters.normalized();
        let resolve = |key: &str| -> String {
            match normalized.get(key) {
                Some(value) => value.to_string(),
                None => OPTION_DEFAULTS.get(key).copied().unwrap_or_default().to_string(),
            }
        };

        let dft_d = resolve("DFT_D");
        let add_cell = normalized
            .get("ADD_CELL")
            .is_some_and(|value| value.as_flag());

        Self {
            charge: resolve("CHARGE"),
            cpus: resolve("CPUS"),
            multiplicity: resolve("MULTIPLICITY"),
            basis: resolve("BASIS"),
            job_type: resolve("JOB_TYPE"),
            dft_d: (!dft_d.trim().eq_ignore_ascii_case(DISPERSION_DISABLED)).then_some(dft_d),
            mem_total: resolve("MEM_TOTAL"),
            method: resolve("METHOD"),
            scf_convergence: resolve("SCF_CONVERGENCE"),
            title: resolve("TITLE"),
            scf_max_cycles: resolve("SCF_MAX_CYCLES"),
            integral: resolve("INTEGRAL"),
            unrestricted: resolve("UNRESTRICTED"),
            add_cell,
        }
    }

    /// Lists the supplied keys that do not name a recognised option.
    pub fn unrecognized_keys(parameters: &ParameterSet) -> Vec<String> {
        parameters
            .iter()
            .map(|(key, _)| key)
            .filter(|key| !OPTION_DEFAULTS.contains_key(normalize_key(key).as_str()))
            .map(str::to_string)
            .collect()
    }

    /// The `#p` route line selecting method, basis, job type and grid.
    pub fn route_line(&self) -> String {
        format!(
            "#p {}{}/{} {} {}",
            self.unrestricted, self.method, self.basis, self.job_type, self.integral
        )
    }
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self::from_parameters(&ParameterSet::new())
    }
}
