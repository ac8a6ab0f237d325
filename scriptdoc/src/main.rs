//! scriptdoc — generate Markdown and HTML documentation from script files.
//!
//! Two extractors:
//!
//! - **comments**: the leading comment block of every script in a folder
//! - **help**: the `<# ... #>` help block of every `function` in a file or folder

mod commands;
mod model;
mod output;
mod parser;
mod render;
mod scan;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ExtractConfig;

#[derive(Parser)]
#[command(
    name = "scriptdoc",
    about = "Generate Markdown and HTML documentation from script comments and help blocks",
    disable_help_subcommand = true
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
    /// Document the leading comment block of every script in a folder
    Comments {
        /// Folder containing the scripts (not searched recursively)
        folder: String,

        #[command(flatten)]
        out: OutputArgs,

        /// Document title
        #[arg(long, default_value = "Script Documentation")]
        title: String,
    },
    /// Document the help block of every function in a file, folder or glob
    Help {
        /// Script file, folder, or glob pattern
        input: String,

        #[command(flatten)]
        out: OutputArgs,

        /// Document title
        #[arg(long, default_value = "Function Help")]
        title: String,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Markdown output file (overwritten)
    #[arg(short = 'm', long)]
    markdown: PathBuf,

    /// HTML output file (overwritten)
    #[arg(long)]
    html: PathBuf,

    /// Script file extension to scan for
    #[arg(short = 'e', long, default_value = "ps1")]
    extension: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (cfg, count) = match cli.command {
        Command::Comments { folder, out, title } => {
            let cfg = config(folder, out, title);
            let count = commands::extract_comments(&cfg)?;
            (cfg, count)
        }
        Command::Help { input, out, title } => {
            let cfg = config(input, out, title);
            let count = commands::extract_help(&cfg)?;
            (cfg, count)
        }
    };

    println!("{} {} section(s) written", style("✓").green(), count);
    println!("  {} {}", style("Markdown:").bold(), cfg.markdown.display());
    println!("  {} {}", style("HTML:").bold(), cfg.html.display());
    Ok(())
}

fn config(input: String, out: OutputArgs, title: String) -> ExtractConfig {
    ExtractConfig {
        input,
        markdown: out.markdown,
        html: out.html,
        extension: out.extension.trim_start_matches('.').to_string(),
        title,
    }
}

/// Log to stderr; `SCRIPTDOC_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("SCRIPTDOC_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("scriptdoc=debug")
        } else {
            EnvFilter::new("scriptdoc=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
