use super::nodes::CodeRef;

/// How to invoke one code: where stdin comes from and where stdout and
/// stderr go, all relative to the working area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInfo {
    pub cmdline_params: Vec<String>,
    pub stdin_name: String,
    pub stdout_name: String,
    pub stderr_name: String,
    pub code: CodeRef,
}

/// Everything the host needs to run a prepared calculation and bring its
/// results back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalcInfo {
    pub codes_info: Vec<CodeInfo>,
    /// Files to copy back from the working area once the run finished.
    pub retrieve_list: Vec<String>,
    pub retrieve_singlefile_list: Vec<String>,
    pub local_copy_list: Vec<String>,
    pub remote_copy_list: Vec<String>,
}
