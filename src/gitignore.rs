//! # Git Ignore Integration
//!
//! This module filters the file set through version-control ignore rules by
//! querying `git check-ignore` over a NUL-separated stdin protocol, in
//! batches to respect external process limits.
//!
//! The process invocation sits behind the [`IgnoreBackend`] trait so tests
//! can exercise the batching without a git binary.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Maximum number of paths handed to the ignore tool per invocation.
const BATCH_SIZE: usize = 100;

/// Capability to decide whether a path participates in the check.
pub trait PathFilter: Send + Sync {
  /// Returns `true` if the path should be kept.
  fn keep(&self, path: &Path) -> bool;
}

/// Backend answering which paths of a batch the version-control system
/// ignores.
pub trait IgnoreBackend {
  /// Returns the subset of `batch` that is ignored, echoed back verbatim.
  fn ignored_in(&self, root: &Path, batch: &[PathBuf]) -> Result<Vec<PathBuf>>;
}

/// `git check-ignore` backed implementation of [`IgnoreBackend`].
pub struct GitCheckIgnore;

impl IgnoreBackend for GitCheckIgnore {
  fn ignored_in(&self, root: &Path, batch: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut child = Command::new("git")
      .args(["check-ignore", "-z", "--stdin"])
      .current_dir(root)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .with_context(|| "Failed to spawn git check-ignore")?;

    {
      let mut stdin = child.stdin.take().with_context(|| "Failed to open git check-ignore stdin")?;
      let mut payload = Vec::new();
      for (i, path) in batch.iter().enumerate() {
        if i > 0 {
          payload.push(0);
        }
        payload.extend_from_slice(path.as_os_str().as_encoded_bytes());
      }
      stdin
        .write_all(&payload)
        .with_context(|| "Failed to write to git check-ignore stdin")?;
    }

    let output = child
      .wait_with_output()
      .with_context(|| "Failed to wait for git check-ignore")?;

    // Exit status 1 means no input path is ignored; only higher codes are
    // failures (128 for "not a repository" and friends).
    match output.status.code() {
      Some(0) | Some(1) => {}
      _ => bail!(
        "git check-ignore failed: {}",
        String::from_utf8_lossy(&output.stderr).trim()
      ),
    }

    let ignored = output
      .stdout
      .split(|byte| *byte == 0)
      .filter(|chunk| !chunk.is_empty())
      .map(|chunk| PathBuf::from(String::from_utf8_lossy(chunk).into_owned()))
      .collect();

    Ok(ignored)
  }
}

/// Path filter backed by a pre-computed set of ignored paths.
///
/// The set is probed once per invocation; the filter itself is a cheap
/// lookup so the same instance serves both checking and coverage.
pub struct GitIgnoreFilter {
  ignored: HashSet<PathBuf>,
}

impl GitIgnoreFilter {
  /// Probes the backend for every path in `files`, in batches of at most
  /// [`BATCH_SIZE`].
  ///
  /// # Errors
  ///
  /// Returns an error if the backend fails, e.g. when the working root is
  /// not inside a git repository.
  pub fn probe<'a, B, I>(backend: &B, root: &Path, files: I) -> Result<Self>
  where
    B: IgnoreBackend + ?Sized,
    I: IntoIterator<Item = &'a PathBuf>,
  {
    let files: Vec<PathBuf> = files.into_iter().cloned().collect();

    let mut ignored = HashSet::new();
    for batch in files.chunks(BATCH_SIZE) {
      ignored.extend(backend.ignored_in(root, batch)?);
    }

    debug!("{} of {} file(s) are ignored by the VCS", ignored.len(), files.len());

    Ok(Self { ignored })
  }
}

impl PathFilter for GitIgnoreFilter {
  fn keep(&self, path: &Path) -> bool {
    !self.ignored.contains(path)
  }
}
