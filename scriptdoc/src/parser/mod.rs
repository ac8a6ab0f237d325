//! Extractors — one per documentation style.

pub mod comment;
pub mod help;

/// Line-comment marker of the supported script language.
pub const COMMENT_MARKER: &str = "#";
