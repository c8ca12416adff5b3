//! Package descriptor lookup.
//!
//! Reads the declared `version` out of the project's `package.json`. Any
//! failure (missing file, malformed JSON, no version field) degrades the
//! field to the sentinel at the call site.

use std::fs;
use std::io;
use std::path::Path;

/// Errors from reading the package descriptor. All variants are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
  #[error("descriptor not found at '{0}'")]
  NotFound(String),

  #[error("failed to read descriptor: {0}")]
  Read(#[source] io::Error),

  #[error("failed to parse descriptor: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("descriptor has no 'version' string field")]
  MissingVersion,
}

/// Declared package version from `<root>/package.json`.
pub fn package_version(root: &Path) -> Result<String, PackageError> {
  let path = root.join("package.json");

  let content = match fs::read_to_string(&path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      return Err(PackageError::NotFound(path.display().to_string()));
    }
    Err(e) => return Err(PackageError::Read(e)),
  };

  let descriptor: serde_json::Value = serde_json::from_str(&content)?;

  descriptor
    .get("version")
    .and_then(|v| v.as_str())
    .map(str::to_string)
    .ok_or(PackageError::MissingVersion)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn reads_declared_version() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name": "app", "version": "2.3.1"}"#).unwrap();

    assert_eq!(package_version(dir.path()).unwrap(), "2.3.1");
  }

  #[test]
  fn missing_descriptor_is_not_found() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(package_version(dir.path()), Err(PackageError::NotFound(_))));
  }

  #[test]
  fn malformed_descriptor_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), "{ not json").unwrap();

    assert!(matches!(package_version(dir.path()), Err(PackageError::Parse(_))));
  }

  #[test]
  fn descriptor_without_version_field() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name": "app"}"#).unwrap();

    assert!(matches!(
      package_version(dir.path()),
      Err(PackageError::MissingVersion)
    ));
  }

  #[test]
  fn non_string_version_is_missing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"version": 2}"#).unwrap();

    assert!(matches!(
      package_version(dir.path()),
      Err(PackageError::MissingVersion)
    ));
  }
}
