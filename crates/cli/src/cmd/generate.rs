//! Implementation of the `buildstamp generate` command.
//!
//! Drives the plugin's lifecycle hooks in the order the host contract
//! prescribes (configResolved → buildStart → closeBundle) against a given
//! project root, standing in for a host pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use buildstamp_lib::config::{PluginOptions, ResolvedConfig};
use buildstamp_lib::plugin::ManifestPlugin;

use crate::output::{format_millis, print_json, print_stat, print_success};

/// Execute the generate command.
///
/// Fires the three hooks in contract order and prints a summary of the
/// written record. A failed write (or a missing output directory) is fatal,
/// matching the plugin's behavior under a real host.
pub fn cmd_generate(
  root: &Path,
  out_dir: &Path,
  mode: &str,
  out_file_name: &str,
  verbose: bool,
  json: bool,
) -> Result<()> {
  let options = PluginOptions {
    verbose,
    out_file_name: out_file_name.to_string(),
  };

  let mut plugin = ManifestPlugin::new(options);
  let config = ResolvedConfig::new(root, out_dir, mode);
  let path = config.manifest_path(out_file_name);

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let record = rt.block_on(async {
    plugin.config_resolved(config);
    plugin.build_start();
    plugin.close_bundle().await
  })?;

  if json {
    print_json(&record)?;
    return Ok(());
  }

  print_success(&format!("Manifest written: {}", path.display()));
  print_stat("Environment", &record.environment);
  print_stat("Package", &record.versions.package);
  print_stat("Commit", &record.git_info.commit_hash);
  print_stat("Branch", &record.git_info.branch);
  print_stat(
    "Runtime",
    &format!("{} {}", record.runtime_info.runtime, record.runtime_info.version),
  );
  print_stat("Duration", &format_millis(record.build_info.duration));

  info!(plugin = plugin.name(), path = %path.display(), "manifest saved");

  Ok(())
}
