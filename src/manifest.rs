use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name of the manifest looked up inside a project directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The subset of `package.json` this tool cares about. Other keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PackageInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl PackageInfo {
    /// The manifest name, if present and non-blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

// Non-string values (numbers, objects, null) read as absent rather than
// failing the whole document.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::String(value) => Some(value),
        _ => None,
    })
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("reading manifest at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing manifest at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("manifest at {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

/// Source of manifest text. The filesystem in production, an in-memory
/// stand-in under test.
pub trait ManifestReader {
    fn read_manifest(&self, path: &Path) -> io::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsManifestReader;

impl ManifestReader for FsManifestReader {
    fn read_manifest(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Reader for when there is no project directory to look in.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnreadableManifest;

impl ManifestReader for UnreadableManifest {
    fn read_manifest(&self, path: &Path) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no project directory to read {} from", path.display()),
        ))
    }
}

pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE_NAME)
}

pub fn load_package_info<R>(project_dir: &Path, reader: &R) -> Result<PackageInfo, ManifestError>
where
    R: ManifestReader + ?Sized,
{
    let path = manifest_path(project_dir);
    let data = reader
        .read_manifest(&path)
        .map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
    // Going through `Value` keeps the last of any repeated keys and lets
    // anything other than an object be rejected up front.
    let value: serde_json::Value =
        serde_json::from_str(&data).map_err(|source| ManifestError::Parse {
            path: path.clone(),
            source,
        })?;
    if !value.is_object() {
        return Err(ManifestError::NotAnObject { path });
    }
    serde_json::from_value(value).map_err(|source| ManifestError::Parse { path, source })
}
