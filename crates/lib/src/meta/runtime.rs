//! Host runtime detection.
//!
//! Which JavaScript runtime is driving the build is read from the
//! `npm_config_user_agent` environment marker that package managers set for
//! their child processes (e.g. `"bun/1.1.8 npm/? node/v22.6.0 darwin arm64"`).
//! Detection walks an explicit probe table in priority order; the first
//! matching token wins and Node.js is the baseline when nothing matches.

use std::env;

use serde::{Deserialize, Serialize};

use crate::consts::UNAVAILABLE;

/// Environment marker consulted for runtime identity.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Probe table, in priority order. Node.js is the baseline and needs no probe.
const PROBES: &[(&str, Runtime)] = &[("bun", Runtime::Bun), ("deno", Runtime::Deno)];

/// The runtimes the plugin can identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Runtime {
  #[serde(rename = "Node.js")]
  Node,
  Bun,
  Deno,
}

impl Runtime {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Runtime::Node => "Node.js",
      Runtime::Bun => "Bun",
      Runtime::Deno => "Deno",
    }
  }
}

impl std::fmt::Display for Runtime {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A detected runtime and its reported version.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeIdentity {
  pub runtime: Runtime,
  pub version: String,
}

/// Detect the runtime hosting this build from the process environment.
pub fn detect() -> RuntimeIdentity {
  detect_from_agent(env::var(USER_AGENT_ENV).ok().as_deref())
}

/// Detection core, split out so tests can simulate marker combinations.
///
/// The agent string is a whitespace-separated list of `name/version`
/// tokens. Probes are evaluated strictly in table order, so a string
/// carrying markers for several runtimes resolves to the highest-priority
/// one.
fn detect_from_agent(agent: Option<&str>) -> RuntimeIdentity {
  let Some(agent) = agent else {
    return RuntimeIdentity {
      runtime: Runtime::Node,
      version: UNAVAILABLE.to_string(),
    };
  };

  for (marker, runtime) in PROBES {
    if let Some(version) = token_version(agent, marker) {
      return RuntimeIdentity {
        runtime: *runtime,
        version,
      };
    }
  }

  RuntimeIdentity {
    runtime: Runtime::Node,
    version: token_version(agent, "node").unwrap_or_else(|| UNAVAILABLE.to_string()),
  }
}

/// Version of the `name/version` token for `name`, if present.
fn token_version(agent: &str, name: &str) -> Option<String> {
  agent
    .split_whitespace()
    .find_map(|token| token.strip_prefix(name)?.strip_prefix('/').map(str::to_string))
    .filter(|version| !version.is_empty())
}
