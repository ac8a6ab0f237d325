//! Version-control operations run inside a repository directory.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Captured text. For pull this is stdout and stderr interleaved.
    pub text: String,
}

/// The two operations the walkers need. `Err` means the command could not be
/// run at all; a command that ran and failed is `Ok` with `success: false`.
pub trait Vcs {
    fn pull(&self, repo: &Path) -> Result<CommandOutput>;
    fn status(&self, repo: &Path) -> Result<CommandOutput>;
}

/// Runs the `git` executable (or a replacement given by path).
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Vcs for GitCli {
    fn pull(&self, repo: &Path) -> Result<CommandOutput> {
        let mut command = Command::new(&self.program);
        command.arg("pull").current_dir(repo);
        run_merged(command)
    }

    fn status(&self, repo: &Path) -> Result<CommandOutput> {
        let output = Command::new(&self.program)
            .args(["status", "--porcelain"])
            .current_dir(repo)
            .output()
            .with_context(|| format!("failed to run {}", self.program.display()))?;
        Ok(CommandOutput {
            success: output.status.success(),
            text: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

/// Run `command` with stdout and stderr sharing one pipe, so progress output
/// on stderr stays in order with the rest and never decides the outcome.
fn run_merged(mut command: Command) -> Result<CommandOutput> {
    let program = command.get_program().to_string_lossy().to_string();
    let (mut reader, writer) = std::io::pipe().context("failed to create pipe")?;
    command.stdout(writer.try_clone().context("failed to create pipe")?);
    command.stderr(writer);

    let mut child = command
        .spawn()
        .with_context(|| format!("failed to run {}", program))?;
    // The pipe only reaches EOF once every write end is closed, including the
    // ones still held by `command`.
    drop(command);

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .with_context(|| format!("failed to read output of {}", program))?;
    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {}", program))?;

    Ok(CommandOutput {
        success: status.success(),
        text: String::from_utf8_lossy(&bytes).to_string(),
    })
}
