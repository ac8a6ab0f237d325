//! Directory walk over the immediate subdirectories of a root.

use crate::report;
use crate::vcs::{CommandOutput, Vcs};
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings shared by both walkers.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub root: PathBuf,
    /// Directory name whose presence marks a repository root, e.g. `.git`.
    pub marker: String,
}

/// One immediate subdirectory of the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_repo: bool,
}

/// Clean/dirty classification of one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clean,
    Dirty,
    /// The status query could not be run or exited non-zero.
    Failed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Clean => "CLEAN",
            Status::Dirty => "DIRTY",
            Status::Failed => "FAILED",
        }
    }
}

/// Counts for the pull walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PullSummary {
    pub updated: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Immediate subdirectories of the root, sorted by name.
pub fn scan(cfg: &WalkConfig) -> Result<Vec<RepositoryEntry>> {
    if !cfg.root.is_dir() {
        bail!("root directory not found: {}", cfg.root.display());
    }
    let entries = fs::read_dir(&cfg.root)
        .with_context(|| format!("failed to read directory: {}", cfg.root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let is_repo = is_repository(&path, &cfg.marker);
        dirs.push(RepositoryEntry { path, name, is_repo });
    }
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

fn is_repository(dir: &Path, marker: &str) -> bool {
    dir.join(marker).is_dir()
}

/// Pull every repository under the root. A failed pull is reported and the
/// walk moves on.
pub fn pull_all(cfg: &WalkConfig, vcs: &dyn Vcs, out: &mut impl Write) -> Result<PullSummary> {
    let mut summary = PullSummary::default();
    for entry in scan(cfg)? {
        if !entry.is_repo {
            writeln!(out, "{}", report::skipped(&entry.name))?;
            summary.skipped += 1;
            continue;
        }

        writeln!(out, "{}", report::updating(&entry.name))?;
        let ok = match vcs.pull(&entry.path) {
            Ok(result) => {
                write!(out, "{}", report::indented(&result.text))?;
                result.success
            }
            Err(e) => {
                tracing::debug!("pull in {} could not run: {:#}", entry.path.display(), e);
                write!(out, "{}", report::indented(&format!("{:#}", e)))?;
                false
            }
        };
        if ok {
            summary.updated += 1;
        } else {
            writeln!(out, "{}", report::pull_failed(&entry.name))?;
            summary.failed += 1;
        }
    }
    Ok(summary)
}

/// Classify every repository under the root as clean or dirty. Directories
/// without the marker are skipped silently.
pub fn status_all(
    cfg: &WalkConfig,
    vcs: &dyn Vcs,
    out: &mut impl Write,
) -> Result<Vec<(String, Status)>> {
    let mut results = Vec::new();
    for entry in scan(cfg)? {
        if !entry.is_repo {
            tracing::debug!("not a repository: {}", entry.path.display());
            continue;
        }
        let status = match vcs.status(&entry.path) {
            Ok(result) => classify(&result),
            Err(e) => {
                tracing::warn!("status in {} could not run: {:#}", entry.path.display(), e);
                Status::Failed
            }
        };
        writeln!(out, "{}", report::status_line(status, &entry.name))?;
        results.push((entry.name, status));
    }
    Ok(results)
}

/// Any porcelain output at all means uncommitted or untracked changes.
pub fn classify(result: &CommandOutput) -> Status {
    if !result.success {
        Status::Failed
    } else if !result.text.is_empty() {
        Status::Dirty
    } else {
        Status::Clean
    }
}
