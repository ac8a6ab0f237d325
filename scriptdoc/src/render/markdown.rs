//! GitHub-flavored markdown renderer.

use crate::model::{CommentBlock, FunctionRecord};
use crate::render::{RenderOptions, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn header(&self, opts: &RenderOptions) -> String {
        format!("# {}\n\n", opts.title)
    }

    fn comment_section(&self, block: &CommentBlock, opts: &RenderOptions) -> String {
        let mut out = format!("## {}\n\n", block.file_name);
        push_fenced(&mut out, &block.lines.join("\n"), opts);
        out
    }

    fn function_section(
        &self,
        _index: usize,
        record: &FunctionRecord,
        opts: &RenderOptions,
    ) -> String {
        let mut out = format!("## {}\n\n", record.name);
        out.push_str(&format!("*From: {}*\n\n", record.source_name()));
        push_fenced(&mut out, &record.help_text, opts);
        out
    }

    fn footer(&self, _opts: &RenderOptions) -> String {
        String::new()
    }
}

/// Append a fenced code block followed by a blank line. Empty `body` gives an
/// empty block.
fn push_fenced(out: &mut String, body: &str, opts: &RenderOptions) {
    out.push_str("```");
    if let Some(ref lang) = opts.fence_lang {
        out.push_str(lang);
    }
    out.push('\n');
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str("```\n\n");
}
