//! The manifest generator plugin.
//!
//! [`ManifestPlugin`] implements the three lifecycle hooks a host build
//! pipeline drives, in contract order:
//!
//! 1. `config_resolved` - capture the host's resolved build configuration
//! 2. `build_start` - record the build-start instant
//! 3. `close_bundle` - gather metadata, assemble the record, write the file
//!
//! All metadata lookups inside `close_bundle` are caught individually and
//! degrade their field to the sentinel; only an unwritable manifest (or a
//! host that never resolved its config) fails the hook.

use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{PluginOptions, ResolvedConfig};
use crate::consts::{PLUGIN_NAME, UNAVAILABLE};
use crate::manifest::{self, BuildInfo, GitInfo, ManifestError, ManifestRecord, RuntimeInfo, Versions};
use crate::meta::{git, package, runtime};

/// Duration reported when the finish hook fires without a prior start hook.
pub const DURATION_UNAVAILABLE: i64 = -1;

/// Errors that can escape the finish hook. These fail the build.
#[derive(Debug, Error)]
pub enum HookError {
  /// `close_bundle` fired before `config_resolved`; without the resolved
  /// config there is no output path to write to.
  #[error("closeBundle fired before configResolved")]
  ConfigNotResolved,

  /// Serializing or writing the manifest failed.
  #[error(transparent)]
  Manifest(#[from] ManifestError),
}

/// The version manifest generator.
///
/// Constructed once at plugin registration; the host invokes the hooks
/// exactly once per build, on a single logical thread of control.
#[derive(Debug)]
pub struct ManifestPlugin {
  options: PluginOptions,
  config: Option<ResolvedConfig>,
  build_start: Option<Instant>,
}

impl ManifestPlugin {
  pub fn new(options: PluginOptions) -> Self {
    Self {
      options,
      config: None,
      build_start: None,
    }
  }

  /// Name the plugin registers under with the host pipeline.
  pub fn name(&self) -> &'static str {
    PLUGIN_NAME
  }

  /// `configResolved` hook: capture the host's resolved configuration.
  pub fn config_resolved(&mut self, config: ResolvedConfig) {
    self.config = Some(config);
  }

  /// `buildStart` hook: record when the build began.
  pub fn build_start(&mut self) {
    self.build_start = Some(Instant::now());
  }

  /// `closeBundle` hook: assemble the manifest record and write it into
  /// the build output directory.
  ///
  /// Returns the written record so embedding callers can surface it.
  pub async fn close_bundle(&mut self) -> Result<ManifestRecord, HookError> {
    let config = self.config.as_ref().ok_or(HookError::ConfigNotResolved)?;

    let package = match package::package_version(&config.root) {
      Ok(version) => version,
      Err(e) => {
        self.log_warn(&format!("could not read package version, using '{UNAVAILABLE}': {e}"));
        UNAVAILABLE.to_string()
      }
    };

    let commit_hash = match git::commit_hash(&config.root).await {
      Ok(hash) => hash,
      Err(e) => {
        self.log_warn(&format!("could not resolve git commit hash, using '{UNAVAILABLE}': {e}"));
        UNAVAILABLE.to_string()
      }
    };

    let branch = match git::branch(&config.root).await {
      Ok(branch) => branch,
      Err(e) => {
        self.log_warn(&format!("could not resolve git branch, using '{UNAVAILABLE}': {e}"));
        UNAVAILABLE.to_string()
      }
    };

    let duration = match self.build_start {
      Some(start) => start.elapsed().as_millis() as i64,
      None => {
        self.log_warn("buildStart never fired; reporting duration as -1");
        DURATION_UNAVAILABLE
      }
    };

    let identity = runtime::detect();

    let record = ManifestRecord {
      environment: config.environment.clone(),
      versions: Versions {
        package,
        platform: identity.version.clone(),
      },
      git_info: GitInfo { commit_hash, branch },
      build_info: BuildInfo {
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        duration,
      },
      runtime_info: RuntimeInfo {
        runtime: identity.runtime,
        version: identity.version,
      },
    };

    let path = config.manifest_path(&self.options.out_file_name);
    let content = manifest::write_manifest(&record, &path)?;

    if self.options.verbose {
      info!(plugin = PLUGIN_NAME, path = %path.display(), "version manifest generated: {content}");
    }

    Ok(record)
  }

  /// Warn about a degraded lookup. Silent unless verbose is enabled.
  fn log_warn(&self, message: &str) {
    if self.options.verbose {
      warn!(plugin = PLUGIN_NAME, "{message}");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn resolved_config(dir: &TempDir) -> ResolvedConfig {
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    ResolvedConfig::new(dir.path(), "dist", "production")
  }

  #[tokio::test]
  async fn close_bundle_without_config_is_fatal() {
    let mut plugin = ManifestPlugin::new(PluginOptions::default());
    plugin.build_start();

    let err = plugin.close_bundle().await.unwrap_err();
    assert!(matches!(err, HookError::ConfigNotResolved));
  }

  #[tokio::test]
  async fn close_bundle_without_start_reports_sentinel_duration() {
    let dir = TempDir::new().unwrap();
    let mut plugin = ManifestPlugin::new(PluginOptions::default());
    plugin.config_resolved(resolved_config(&dir));

    let record = plugin.close_bundle().await.unwrap();
    assert_eq!(record.build_info.duration, DURATION_UNAVAILABLE);
  }

  #[tokio::test]
  async fn duration_is_non_negative_when_hooks_fire_in_order() {
    let dir = TempDir::new().unwrap();
    let mut plugin = ManifestPlugin::new(PluginOptions::default());
    plugin.config_resolved(resolved_config(&dir));
    plugin.build_start();

    let record = plugin.close_bundle().await.unwrap();
    assert!(record.build_info.duration >= 0);
  }

  #[tokio::test]
  async fn missing_output_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut plugin = ManifestPlugin::new(PluginOptions::default());
    // No dist/ created.
    plugin.config_resolved(ResolvedConfig::new(dir.path(), "dist", "production"));
    plugin.build_start();

    let err = plugin.close_bundle().await.unwrap_err();
    assert!(matches!(err, HookError::Manifest(ManifestError::Write { .. })));
  }

  #[tokio::test]
  async fn custom_out_file_name_is_honored() {
    let dir = TempDir::new().unwrap();
    let options = PluginOptions {
      out_file_name: "stamp.json".to_string(),
      ..Default::default()
    };
    let mut plugin = ManifestPlugin::new(options);
    plugin.config_resolved(resolved_config(&dir));
    plugin.build_start();

    plugin.close_bundle().await.unwrap();
    assert!(dir.path().join("dist").join("stamp.json").exists());
  }
}
