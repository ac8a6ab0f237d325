//! Input resolution: folder listing, single files and glob patterns.

use crate::model::ScriptFile;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level files in `dir` whose extension matches `extension`
/// (case-insensitive), sorted by name. Fails if `dir` cannot be listed.
pub fn list_scripts(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let p = entry.path();
        if p.is_file() && has_extension(&p, extension) {
            files.push(p);
        }
    }
    files.sort();
    Ok(files)
}

/// Resolve a help-extractor input: a directory, a single file, or a glob
/// pattern. Missing inputs are an error.
pub fn resolve_input(input: &str, extension: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(input);
    if path.is_dir() {
        return list_scripts(path, extension);
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.exists() {
        bail!("not a file or directory: {}", input);
    }
    if !is_glob(input) {
        bail!("path not found: {}", input);
    }
    let mut matches: Vec<_> = glob::glob(input)
        .with_context(|| format!("invalid glob pattern: {}", input))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    if matches.is_empty() {
        bail!("no files matched: {}", input);
    }
    matches.sort();
    matches.dedup();
    Ok(matches)
}

/// Read every path, skipping (with a warning) files that cannot be read as
/// UTF-8 text. A leading byte order mark is dropped.
pub fn read_all(paths: &[PathBuf]) -> Vec<ScriptFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::read_to_string(path) {
            Ok(content) => files.push(ScriptFile {
                path: path.clone(),
                content: strip_bom(content),
            }),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
            }
        }
    }
    files
}

fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '['])
}
