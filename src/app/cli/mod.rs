//! CLI Adapter.

mod build;
mod extract_issue;
mod install;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "pybuild-ci")]
#[command(version)]
#[command(
    about = "CI helpers for issue-driven Python builds",
    long_about = None
)]
struct Cli {
    /// TOML file overriding labels, defaults, and tool programs
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract python-version, target-platform, and zip-link from an issue body
    #[clap(visible_alias = "x")]
    ExtractIssue {
        /// Full issue body text
        #[arg(allow_hyphen_values = true)]
        issue_body: String,
    },
    /// Install dependencies from a requirements file if it exists
    #[clap(visible_alias = "i")]
    InstallRequirements {
        /// Path to the requirements file
        requirements_file: PathBuf,
    },
    /// Find the first build spec under a directory and package it
    #[clap(visible_alias = "b")]
    Build {
        /// Project directory to search
        project_dir: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logging::init_logging(cli.verbose);

    let result = crate::app::api::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::ExtractIssue { issue_body } => {
                extract_issue::run_extract_issue(&issue_body, &config)
            }
            Commands::InstallRequirements { requirements_file } => {
                install::run_install_requirements(&requirements_file, &config)
            }
            Commands::Build { project_dir } => build::run_build(&project_dir, &config),
        }
    });

    if let Err(e) = result {
        exit_with(&e);
    }
}

fn exit_with(error: &AppError) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(error.exit_code());
}
