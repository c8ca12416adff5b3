//! Implementation of the `buildstamp show` command.
//!
//! Loads a previously written manifest and displays it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use buildstamp_lib::manifest::ManifestRecord;

use crate::output::{format_millis, print_info, print_json, print_stat};

/// Execute the show command.
pub fn cmd_show(path: &Path, json: bool) -> Result<()> {
  let content =
    fs::read_to_string(path).with_context(|| format!("Failed to read manifest at '{}'", path.display()))?;

  let record: ManifestRecord =
    serde_json::from_str(&content).with_context(|| format!("Malformed manifest at '{}'", path.display()))?;

  if json {
    print_json(&record)?;
    return Ok(());
  }

  print_info(&format!("Manifest: {}", path.display()));
  print_stat("Environment", &record.environment);
  print_stat("Package", &record.versions.package);
  print_stat("Platform", &record.versions.platform);
  print_stat("Commit", &record.git_info.commit_hash);
  print_stat("Branch", &record.git_info.branch);
  print_stat("Built", &record.build_info.time);
  print_stat("Duration", &format_millis(record.build_info.duration));
  print_stat(
    "Runtime",
    &format!("{} {}", record.runtime_info.runtime, record.runtime_info.version),
  );

  Ok(())
}
