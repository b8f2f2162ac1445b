pub mod cli;
pub mod manifest;
pub mod resolve;
pub mod result;

use std::path::Path;

use tracing::debug;

pub use manifest::{
    FsManifestReader, ManifestError, ManifestReader, PackageInfo, UnreadableManifest,
};
pub use resolve::{FALLBACK_PACKAGE_NAME, resolve_package_name};
pub use result::{CliResult, build_result};

/// Resolve the package name against the current working directory and build
/// the greeting. An unknown working directory counts as a missing manifest.
pub fn run_cli(package_name: Option<&str>) -> CliResult {
    match std::env::current_dir() {
        Ok(cwd) => run_cli_in(package_name, &cwd, &FsManifestReader),
        Err(err) => {
            debug!(error = %err, "could not determine working directory");
            run_cli_in(package_name, Path::new("."), &UnreadableManifest)
        }
    }
}

/// Same as [`run_cli`] with the project directory and manifest source made
/// explicit.
pub fn run_cli_in<R>(package_name: Option<&str>, project_dir: &Path, reader: &R) -> CliResult
where
    R: ManifestReader + ?Sized,
{
    let resolved = resolve_package_name(package_name, project_dir, reader);
    build_result(&resolved)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::run_cli_in;
    use crate::manifest::UnreadableManifest;
    use crate::resolve::tests::StubReader;

    #[test]
    fn explicit_name_produces_full_result() {
        let reader = StubReader::failing();
        let result = run_cli_in(Some("my-awesome-cli"), Path::new("."), &reader);

        assert_eq!(reader.calls.get(), 0);
        assert!(result.success);
        assert_eq!(result.package_name, "my-awesome-cli");
        assert_eq!(
            result.message,
            "Welcome to my-awesome-cli! The CLI is ready to use."
        );
    }

    #[test]
    fn manifest_name_produces_full_result() {
        let reader = StubReader::with(r#"{"name":"my-dynamic-package","version":"1.0.0"}"#);
        let result = run_cli_in(None, Path::new("."), &reader);

        assert_eq!(reader.calls.get(), 1);
        assert!(result.success);
        assert_eq!(result.package_name, "my-dynamic-package");
        assert_eq!(
            result.message,
            "Welcome to my-dynamic-package! The CLI is ready to use."
        );
    }

    #[test]
    fn read_error_produces_fallback_result() {
        let reader = StubReader::failing();
        let result = run_cli_in(None, Path::new("."), &reader);

        assert_eq!(reader.calls.get(), 1);
        assert!(result.success);
        assert_eq!(result.package_name, "unknown-package");
        assert_eq!(
            result.message,
            "Welcome to unknown-package! The CLI is ready to use."
        );
    }

    #[test]
    fn nameless_manifest_produces_fallback_result() {
        let reader = StubReader::with(r#"{"version":"1.0.0"}"#);
        let result = run_cli_in(None, Path::new("."), &reader);

        assert!(result.success);
        assert_eq!(result.package_name, "unknown-package");
        assert_eq!(
            result.message,
            "Welcome to unknown-package! The CLI is ready to use."
        );
    }

    #[test]
    fn missing_working_directory_keeps_override_rules() {
        let named = run_cli_in(Some("my-awesome-cli"), Path::new("."), &UnreadableManifest);
        assert_eq!(named.package_name, "my-awesome-cli");

        let unnamed = run_cli_in(Some(""), Path::new("."), &UnreadableManifest);
        assert!(unnamed.success);
        assert_eq!(unnamed.package_name, "unknown-package");
    }
}
