// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! triage - command-line front end for the triage classification engine.
//!
//! Reads a corpus snapshot, joins a tracker repository with its review
//! project, and writes one CSV row per issue.
//!
//! # Main Components
//!
//! - [`Cli`] - argument parsing
//! - [`Config`] - `triage.toml` discovery and merging with flags
//! - [`Error`] - error types for all operations
//!
//! # Running
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = triage::Cli::parse();
//! triage::run(cli)?;
//! ```

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, GlobalArgs};
pub use config::{Config, Overrides, Settings};
pub use error::{Error, Result};

use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;

/// Runs one parsed invocation.
pub fn run(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.global.verbose);

    match cli.command {
        Command::Export { output } => {
            let settings = load_settings(&cli.global)?;
            commands::export::run(&settings, output.as_deref())
        }
        Command::Index => {
            let settings = load_settings(&cli.global)?;
            commands::index::run(&settings)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "triage", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let user_dir = config::user_config_dir();
    settings_in(global, &cwd, user_dir.as_deref())
}

/// Resolves settings for a run started in `cwd`.
pub(crate) fn settings_in(
    global: &GlobalArgs,
    cwd: &Path,
    user_dir: Option<&Path>,
) -> Result<Settings> {
    let config = Config::discover(global.config.as_deref(), cwd, user_dir)?;
    let settings = config.resolve(global.overrides())?;
    tracing::debug!(
        corpus = %settings.corpus.display(),
        project = %settings.target.project,
        repo = %settings.target.repo,
        aux = ?settings.rules.aux,
        "resolved settings"
    );
    Ok(settings)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
