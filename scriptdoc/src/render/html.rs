//! HTML renderer — standalone HTML page, one section per file or function.

use crate::model::{CommentBlock, FunctionRecord};
use crate::render::{html_escape, DocKind, RenderOptions, Renderer};

pub struct HtmlRenderer;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }
h2 { border-bottom: 1px solid #ddd; padding-bottom: 0.2em; }
pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }
.source { color: #666; }
.toggle { cursor: pointer; border: 1px solid #ccc; border-radius: 3px; background: #fafafa; padding: 0.2em 0.6em; }
";

const TOGGLE_SCRIPT: &str = "\
function toggleHelp(id) {
  var el = document.getElementById(id);
  var btn = document.querySelector('[data-target=\"' + id + '\"]');
  var hidden = el.style.display === 'none';
  el.style.display = hidden ? 'block' : 'none';
  if (btn) { btn.textContent = hidden ? 'Hide help' : 'Show help'; }
}
";

impl Renderer for HtmlRenderer {
    fn header(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&opts.title)));
        out.push_str("<style>\n");
        out.push_str(STYLE);
        out.push_str("</style>\n");
        if opts.kind == DocKind::Functions {
            out.push_str("<script>\n");
            out.push_str(TOGGLE_SCRIPT);
            out.push_str("</script>\n");
        }
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&opts.title)));
        out
    }

    fn comment_section(&self, block: &CommentBlock, _opts: &RenderOptions) -> String {
        format!(
            "<h2>{}</h2>\n<pre><code>{}</code></pre>\n",
            html_escape(&block.file_name),
            html_escape(&block.lines.join("\n"))
        )
    }

    fn function_section(
        &self,
        index: usize,
        record: &FunctionRecord,
        _opts: &RenderOptions,
    ) -> String {
        let id = format!("help-{}", index);
        let mut out = String::new();
        out.push_str(&format!("<h2>{}</h2>\n", html_escape(&record.name)));
        out.push_str(&format!(
            "<p class=\"source\"><em>From: {}</em></p>\n",
            html_escape(&record.source_name())
        ));
        out.push_str(&format!(
            "<button class=\"toggle\" data-target=\"{id}\" onclick=\"toggleHelp('{id}')\">Show help</button>\n"
        ));
        out.push_str(&format!(
            "<div id=\"{id}\" class=\"help\" style=\"display:none\">\n<pre><code>{}</code></pre>\n</div>\n",
            html_escape(&record.help_text)
        ));
        out
    }

    fn footer(&self, _opts: &RenderOptions) -> String {
        "</body>\n</html>\n".to_string()
    }
}
