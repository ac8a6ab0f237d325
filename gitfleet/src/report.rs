//! Console lines for the walkers, colorized with `console`.

use crate::walk::{PullSummary, Status};
use console::style;

pub fn status_line(status: Status, name: &str) -> String {
    let label = match status {
        Status::Clean => style(status.label()).green(),
        Status::Dirty => style(status.label()).yellow(),
        Status::Failed => style(status.label()).red(),
    };
    format!("{} : {}", label, name)
}

pub fn updating(name: &str) -> String {
    format!("{} Updating {}", style("→").cyan(), style(name).bold())
}

pub fn pull_failed(name: &str) -> String {
    format!("{} Failed to update {}", style("✗").red(), name)
}

pub fn skipped(name: &str) -> String {
    format!("{} Skipping {} (not a repository)", style("!").yellow(), name)
}

pub fn pull_summary(summary: &PullSummary) -> String {
    format!(
        "\n{} {} updated, {} failed, {} skipped",
        style("Pull complete:").bold(),
        summary.updated,
        summary.failed,
        summary.skipped
    )
}

/// Indent each line of command output by four spaces.
pub fn indented(text: &str) -> String {
    text.lines().map(|l| format!("    {}\n", l)).collect()
}
