use serde::Serialize;

/// Outcome of a single run, as returned to library callers and printed
/// with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliResult {
    pub success: bool,
    pub message: String,
    pub package_name: String,
}

pub fn greeting(package_name: &str) -> String {
    format!("Welcome to {package_name}! The CLI is ready to use.")
}

pub fn build_result(package_name: &str) -> CliResult {
    CliResult {
        success: true,
        message: greeting(package_name),
        package_name: package_name.to_string(),
    }
}
