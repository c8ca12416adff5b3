//! Manifest record types.
//!
//! One [`ManifestRecord`] is produced per build, after all other outputs are
//! finalized. The record is always fully populated: a failed lookup degrades
//! its field to the `"unavailable"` sentinel instead of dropping the key.

use serde::{Deserialize, Serialize};

use crate::meta::runtime::Runtime;

/// The provenance record written into the build output directory.
///
/// # Example
///
/// ```json
/// {
///   "environment": "production",
///   "versions": { "package": "2.3.1", "platform": "v20.10.0" },
///   "gitInfo": { "commitHash": "abcd123", "branch": "main" },
///   "buildInfo": { "time": "2026-08-07T12:00:00.000Z", "duration": 1874 },
///   "runtimeInfo": { "runtime": "Node.js", "version": "v20.10.0" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
  /// The mode the host pipeline resolved for this build.
  pub environment: String,
  pub versions: Versions,
  pub git_info: GitInfo,
  pub build_info: BuildInfo,
  pub runtime_info: RuntimeInfo,
}

/// Declared package version and host platform version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versions {
  /// `version` field of the project's package descriptor.
  pub package: String,
  /// Version identifier of the host runtime.
  pub platform: String,
}

/// Source-control identity of the built tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitInfo {
  /// Short revision id of HEAD.
  pub commit_hash: String,
  /// Current branch name.
  pub branch: String,
}

/// When the build happened and how long it took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
  /// Wall-clock time at record assembly, ISO-8601 UTC.
  pub time: String,
  /// Elapsed milliseconds between the start and finish hooks, or `-1`
  /// when the start hook never fired.
  pub duration: i64,
}

/// Identity of the runtime hosting the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeInfo {
  pub runtime: Runtime,
  /// The runtime's reported version.
  pub version: String,
}
