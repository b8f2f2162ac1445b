use std::path::Path;

use tracing::debug;

use crate::manifest::{ManifestReader, load_package_info};

/// Name used whenever neither an override nor the manifest supplies one.
pub const FALLBACK_PACKAGE_NAME: &str = "unknown-package";

/// Pick the display name: explicit override, then the manifest's `name`,
/// then [`FALLBACK_PACKAGE_NAME`]. Never fails and never returns an empty
/// string. The manifest is only read when no usable override is given.
pub fn resolve_package_name<R>(explicit: Option<&str>, project_dir: &Path, reader: &R) -> String
where
    R: ManifestReader + ?Sized,
{
    if let Some(name) = explicit.filter(|name| !name.is_empty()) {
        debug!(name, "using explicit package name");
        return name.to_string();
    }

    name_from_manifest(project_dir, reader).unwrap_or_else(|| FALLBACK_PACKAGE_NAME.to_string())
}

fn name_from_manifest<R>(project_dir: &Path, reader: &R) -> Option<String>
where
    R: ManifestReader + ?Sized,
{
    match load_package_info(project_dir, reader) {
        Ok(info) => match info.display_name() {
            Some(name) => {
                debug!(name, "read package name from manifest");
                Some(name.to_string())
            }
            None => {
                debug!("manifest has no name field, using fallback");
                None
            }
        },
        Err(err) => {
            debug!(error = ?err, "manifest unavailable, using fallback");
            None
        }
    }
}
