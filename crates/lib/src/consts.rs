//! Crate-wide constants.

use std::time::Duration;

/// Name the plugin registers under with the host pipeline.
///
/// Used as the prefix for every log line so degraded lookups can be
/// attributed when several plugins share a build.
pub const PLUGIN_NAME: &str = "buildstamp";

/// Default file name for the manifest within the build output directory.
pub const DEFAULT_OUT_FILE_NAME: &str = "version-manifest.json";

/// Substituted for any field whose lookup failed.
pub const UNAVAILABLE: &str = "unavailable";

/// Upper bound on each git invocation.
///
/// A hung subprocess must not hang the build; expiration degrades the
/// field like any other lookup failure.
pub const GIT_TIMEOUT: Duration = Duration::from_secs(5);
