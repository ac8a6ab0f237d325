//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod markdown;

use crate::model::{CommentBlock, FunctionRecord};

/// Which extractor a document is built for. The HTML header differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Comments,
    Functions,
}

/// Settings shared by every section of one document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub kind: DocKind,
    /// Info string of fenced code blocks, e.g. `powershell`.
    pub fence_lang: Option<String>,
}

/// Renders the pieces of a document; sections are appended in scan order.
pub trait Renderer {
    fn header(&self, opts: &RenderOptions) -> String;
    fn comment_section(&self, block: &CommentBlock, opts: &RenderOptions) -> String;
    /// `index` is the record's position in the document, used for element ids.
    fn function_section(
        &self,
        index: usize,
        record: &FunctionRecord,
        opts: &RenderOptions,
    ) -> String;
    fn footer(&self, opts: &RenderOptions) -> String;
}

/// Fenced-code language tag for a script extension.
pub fn fence_language(extension: &str) -> Option<String> {
    match extension.to_ascii_lowercase().as_str() {
        "ps1" | "psm1" | "psd1" => Some("powershell".to_string()),
        "sh" | "bash" => Some("bash".to_string()),
        _ => None,
    }
}

/// Escape `&`, `<` and `>`. `&` goes first so entities are never re-escaped.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
