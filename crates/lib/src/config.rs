//! Plugin configuration.
//!
//! Two configuration values exist with different lifetimes: [`PluginOptions`]
//! is supplied once at registration time, [`ResolvedConfig`] is captured from
//! the host when it reports its resolved build configuration. Both are plain
//! values owned by the plugin instance; there is no process-wide state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_OUT_FILE_NAME;

/// Registration-time options, merged over defaults by the caller.
///
/// # Example
///
/// ```
/// use buildstamp_lib::config::PluginOptions;
///
/// let options = PluginOptions {
///   verbose: true,
///   ..Default::default()
/// };
/// assert_eq!(options.out_file_name, "version-manifest.json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
  /// Emit info/warn log lines. Off by default; with this off the plugin
  /// is silent regardless of how the lookups fare.
  pub verbose: bool,

  /// File name of the manifest within the build output directory.
  pub out_file_name: String,
}

impl Default for PluginOptions {
  fn default() -> Self {
    Self {
      verbose: false,
      out_file_name: DEFAULT_OUT_FILE_NAME.to_string(),
    }
  }
}

/// The host pipeline's resolved build configuration, captured at the
/// `configResolved` hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
  /// Project root; the package descriptor lives here and git runs here.
  pub root: PathBuf,

  /// Build output directory, relative to `root` unless absolute.
  pub out_dir: PathBuf,

  /// The mode the host resolved for this build (e.g. "production").
  pub environment: String,
}

impl ResolvedConfig {
  pub fn new(root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, environment: impl Into<String>) -> Self {
    Self {
      root: root.into(),
      out_dir: out_dir.into(),
      environment: environment.into(),
    }
  }

  /// Absolute output directory (`root`-relative `out_dir` resolved).
  pub fn output_dir(&self) -> PathBuf {
    if self.out_dir.is_absolute() {
      self.out_dir.clone()
    } else {
      self.root.join(&self.out_dir)
    }
  }

  /// Full path of the manifest file for the given file name.
  pub fn manifest_path(&self, file_name: &str) -> PathBuf {
    self.output_dir().join(file_name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn options_default_values() {
    let options = PluginOptions::default();
    assert!(!options.verbose);
    assert_eq!(options.out_file_name, "version-manifest.json");
  }

  #[test]
  fn options_merge_over_defaults() {
    let options = PluginOptions {
      out_file_name: "stamp.json".to_string(),
      ..Default::default()
    };
    assert!(!options.verbose);
    assert_eq!(options.out_file_name, "stamp.json");
  }

  #[test]
  fn manifest_path_joins_root_out_dir_and_file() {
    let config = ResolvedConfig::new("/srv/app", "dist", "production");
    assert_eq!(
      config.manifest_path("version-manifest.json"),
      PathBuf::from("/srv/app/dist/version-manifest.json")
    );
  }

  #[test]
  fn absolute_out_dir_ignores_root() {
    let config = ResolvedConfig::new("/srv/app", "/var/out", "production");
    assert_eq!(config.output_dir(), PathBuf::from("/var/out"));
  }
}
