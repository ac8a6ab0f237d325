//! Data model for extracted documentation — format-agnostic.

use std::path::{Path, PathBuf};

/// Help text used when a function body carries no `<# ... #>` block.
pub const NO_HELP: &str = "No help block found.";

/// A script file read from disk, before extraction.
#[derive(Debug)]
pub struct ScriptFile {
    pub path: PathBuf,
    pub content: String,
}

impl ScriptFile {
    /// File name used in headings and "From:" lines.
    pub fn display_name(&self) -> String {
        file_name(&self.path)
    }
}

/// Leading run of comment lines of one file, markers intact.
#[derive(Debug, Default)]
pub struct CommentBlock {
    pub file_name: String,
    pub lines: Vec<String>,
}

/// A single function definition and its help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// Trimmed help block interior, or [`NO_HELP`].
    pub help_text: String,
    pub source_file: PathBuf,
}

impl FunctionRecord {
    pub fn has_help(&self) -> bool {
        self.help_text != NO_HELP
    }

    pub fn source_name(&self) -> String {
        file_name(&self.source_file)
    }
}

/// Last path component as a lossy string, or the whole path if there is none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
