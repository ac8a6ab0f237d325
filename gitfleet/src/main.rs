//! gitfleet — pull or inspect every Git repository under a directory.
//!
//! Only the immediate subdirectories of the root are visited. A directory is
//! a repository when it contains the marker directory (`.git` by default).

mod report;
mod vcs;
mod walk;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vcs::GitCli;
use walk::WalkConfig;

#[derive(Parser)]
#[command(
    name = "gitfleet",
    about = "Run git pull or git status across every repository in a directory"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run `git pull` in every repository
    Pull(WalkArgs),
    /// Print CLEAN or DIRTY for every repository
    Status(WalkArgs),
}

#[derive(Args)]
struct WalkArgs {
    /// Directory whose immediate subdirectories are scanned
    #[arg(short, long, env = "GITFLEET_ROOT", default_value = ".")]
    root: PathBuf,

    /// Subdirectory name that marks a repository
    #[arg(long, default_value = ".git")]
    marker: String,

    /// Git executable to run
    #[arg(long, default_value = "git")]
    git: PathBuf,
}

impl WalkArgs {
    fn split(self) -> (WalkConfig, GitCli) {
        let cfg = WalkConfig {
            root: self.root,
            marker: self.marker,
        };
        (cfg, GitCli::new(self.git))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Pull(args) => {
            let (cfg, git) = args.split();
            let summary = walk::pull_all(&cfg, &git, &mut out)?;
            writeln!(out, "{}", report::pull_summary(&summary))?;
        }
        Command::Status(args) => {
            let (cfg, git) = args.split();
            walk::status_all(&cfg, &git, &mut out)?;
        }
    }
    Ok(())
}

/// Log to stderr; `GITFLEET_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("GITFLEET_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("gitfleet=debug")
        } else {
            EnvFilter::new("gitfleet=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}
