//! Function help block extraction — regex scan over the whole file text.
//!
//! A function is `function <name> {` followed by the shortest body that ends
//! at a `}` in column zero. Braces nested inside the body are not counted, so
//! an inner `}` at column zero ends the match early.

use crate::model::{FunctionRecord, ScriptFile, NO_HELP};
use regex::Regex;
use std::sync::LazyLock;

static RE_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)function\s+([\w-]+)\s*\{(.*?)^\}").unwrap());

static RE_HELP_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<#(.*?)#>").unwrap());

/// All function records of `file`, in match order.
pub fn extract(file: &ScriptFile) -> Vec<FunctionRecord> {
    RE_FUNCTION
        .captures_iter(&file.content)
        .map(|caps| FunctionRecord {
            name: caps[1].to_string(),
            help_text: help_text(&caps[2]),
            source_file: file.path.clone(),
        })
        .collect()
}

/// Trimmed interior of the first help block in `body`, or the sentinel.
pub fn help_text(body: &str) -> String {
    match RE_HELP_BLOCK.captures(body) {
        Some(caps) => caps[1].trim().to_string(),
        None => NO_HELP.to_string(),
    }
}
