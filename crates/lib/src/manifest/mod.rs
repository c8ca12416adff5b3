//! The version manifest record and its persistence.
//!
//! The record's JSON field names and nesting are the contract downstream
//! consumers depend on; they are pinned through serde renames and must not
//! change shape.

mod types;

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

pub use types::*;

/// Errors from serializing or persisting the manifest.
///
/// Unlike the metadata lookups these are fatal: an undeliverable manifest
/// should fail the build rather than silently succeed.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to serialize manifest: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("failed to write manifest to '{path}': {source}")]
  Write {
    path: String,
    #[source]
    source: std::io::Error,
  },
}

/// Serialize the record as pretty-printed JSON (2-space indentation).
pub fn render(record: &ManifestRecord) -> Result<String, ManifestError> {
  Ok(serde_json::to_string_pretty(record)?)
}

/// Write the record to `path`.
///
/// The parent directory must already exist: by the time the manifest is
/// written the host has finalized its outputs there, so a missing directory
/// means the build went wrong and the error propagates.
pub fn write_manifest(record: &ManifestRecord, path: &Path) -> Result<String, ManifestError> {
  let content = render(record)?;

  fs::write(path, &content).map_err(|source| ManifestError::Write {
    path: path.display().to_string(),
    source,
  })?;

  debug!(path = %path.display(), "manifest written");

  Ok(content)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::meta::runtime::Runtime;
  use tempfile::TempDir;

  fn sample_record() -> ManifestRecord {
    ManifestRecord {
      environment: "production".to_string(),
      versions: Versions {
        package: "2.3.1".to_string(),
        platform: "v20.10.0".to_string(),
      },
      git_info: GitInfo {
        commit_hash: "abcd123".to_string(),
        branch: "main".to_string(),
      },
      build_info: BuildInfo {
        time: "2026-08-07T12:00:00.000Z".to_string(),
        duration: 42,
      },
      runtime_info: RuntimeInfo {
        runtime: Runtime::Node,
        version: "v20.10.0".to_string(),
      },
    }
  }

  #[test]
  fn render_uses_stable_camel_case_keys() {
    let json = render(&sample_record()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Value objects iterate alphabetically; compare the key set.
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
      keys,
      vec!["buildInfo", "environment", "gitInfo", "runtimeInfo", "versions"]
    );
    assert_eq!(value["gitInfo"]["commitHash"], "abcd123");
    assert_eq!(value["buildInfo"]["duration"], 42);
    assert_eq!(value["runtimeInfo"]["runtime"], "Node.js");
  }

  #[test]
  fn render_is_pretty_printed() {
    let json = render(&sample_record()).unwrap();
    assert!(json.contains("\n  \"versions\""));
  }

  #[test]
  fn write_manifest_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("version-manifest.json");

    let record = sample_record();
    write_manifest(&record, &path).unwrap();

    let loaded: ManifestRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, record);
  }

  #[test]
  fn write_manifest_fails_on_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("version-manifest.json");

    let err = write_manifest(&sample_record(), &path).unwrap_err();
    assert!(matches!(err, ManifestError::Write { .. }));
  }
}
