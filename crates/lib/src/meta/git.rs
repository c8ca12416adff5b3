//! Git lookups.
//!
//! Two read-only invocations of the git tool resolve the short revision id
//! of HEAD and the current branch name. Absence of the tool or of a
//! repository is a recoverable condition, not an error; so is a command
//! that outlives its time bound.

use std::path::Path;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::consts::GIT_TIMEOUT;

/// Errors from a git invocation. All variants are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
  /// The subprocess could not be spawned (typically: git not installed).
  #[error("failed to run git: {0}")]
  Spawn(#[from] std::io::Error),

  /// git ran and exited non-zero (typically: not a repository).
  #[error("'git {args}' exited with status {code:?}")]
  CommandFailed { args: String, code: Option<i32> },

  /// git did not finish within the time bound.
  #[error("'git {args}' did not finish within {timeout:?}")]
  TimedOut { args: String, timeout: Duration },
}

/// Short revision id of HEAD (`git rev-parse --short HEAD`).
pub async fn commit_hash(root: &Path) -> Result<String, GitError> {
  run_git(root, &["rev-parse", "--short", "HEAD"]).await
}

/// Current branch name (`git rev-parse --abbrev-ref HEAD`).
pub async fn branch(root: &Path) -> Result<String, GitError> {
  run_git(root, &["rev-parse", "--abbrev-ref", "HEAD"]).await
}

/// Run git in `root` and return its trimmed stdout.
///
/// The wait is bounded by [`GIT_TIMEOUT`]; a hung subprocess must not hang
/// the build.
async fn run_git(root: &Path, args: &[&str]) -> Result<String, GitError> {
  debug!(args = ?args, root = %root.display(), "running git");

  let result = timeout(
    GIT_TIMEOUT,
    Command::new("git")
      .args(args)
      .current_dir(root)
      .kill_on_drop(true)
      .output(),
  )
  .await;

  let output = match result {
    Ok(output) => output?,
    Err(_) => {
      return Err(GitError::TimedOut {
        args: args.join(" "),
        timeout: GIT_TIMEOUT,
      });
    }
  };

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
      debug!(stderr = %stderr.trim(), "git stderr");
    }

    return Err(GitError::CommandFailed {
      args: args.join(" "),
      code: output.status.code(),
    });
  }

  Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
