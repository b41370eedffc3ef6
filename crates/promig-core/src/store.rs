//! Profile file discovery, loading, and atomic write-back.
//!
//! Output formatting contract: 2-space indentation, non-ASCII text written
//! verbatim, trailing newline. Writes go through a temp file in the target
//! directory and a rename, so a crash mid-write never corrupts a profile.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::defaults;
use crate::error::{Error, Result};
use crate::models::JsonMap;

/// Whether a filename matches the `profile-*.json` pattern.
pub fn matches_profile_pattern(name: &str) -> bool {
    name.starts_with(defaults::PROFILE_PREFIX) && name.ends_with(defaults::PROFILE_SUFFIX)
}

/// List profile files under `dir`, sorted by name for a stable processing
/// order. Subdirectories are not descended into.
pub fn discover_profiles(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(&entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_str().is_some_and(matches_profile_pattern) {
            paths.push(entry.path());
        }
    }

    paths.sort();
    debug!(count = paths.len(), dir = %dir.display(), "discovered profiles");
    Ok(paths)
}

/// Read and parse a profile document.
pub fn load_profile(path: &Path) -> Result<JsonMap> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| Error::parse(path, e))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Serialize a document and atomically replace the file at `path`.
pub fn save_profile(path: &Path, doc: &JsonMap) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(doc).map_err(|e| Error::parse(path, e))?;
    rendered.push('\n');

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp =
        NamedTempFile::new_in(dir.unwrap_or(Path::new("."))).map_err(|e| Error::io(path, e))?;
    tmp.write_all(rendered.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
