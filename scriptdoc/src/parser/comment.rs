//! Leading comment block extraction.
//!
//! A file's comment block is the run of lines at the very top whose trimmed
//! text starts with `#`. The first line that does not ends the block, so a
//! file opening with code has an empty block.

use super::COMMENT_MARKER;
use crate::model::{CommentBlock, ScriptFile};

/// Extract the leading comment block of `file`.
pub fn extract(file: &ScriptFile) -> CommentBlock {
    CommentBlock {
        file_name: file.display_name(),
        lines: leading_comments(&file.content),
    }
}

/// Raw lines (markers and indentation intact) of the leading comment run.
pub fn leading_comments(content: &str) -> Vec<String> {
    content
        .lines()
        .take_while(|line| line.trim().starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}
