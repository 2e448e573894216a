// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use triage_core::{AuxPolicy, ProjectId, RepoId};

use crate::config::Overrides;

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Commands:
  export      Classify issues and write them as CSV
  index       List issues that have an in-flight change
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  triage --corpus ./snapshot export             Export golang/go to stdout
  triage --corpus ./snapshot export -o go.csv   Export to a file
  triage --corpus ./snapshot --aux urgency export
  triage --corpus ./snapshot index              Show issues with pending changes";

#[derive(Parser)]
#[command(name = "triage")]
#[command(version)]
#[command(about = "Derive workflow state for tracker issues from labels and code review")]
#[command(
    long_about = "Derive workflow state for tracker issues from labels and code review.\n\n\
    Joins a tracker repository with the review project that fixes it and writes one CSV row per issue."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: ./triage.toml, then the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Corpus snapshot directory
    #[arg(long, global = true, env = "TRIAGE_CORPUS", value_name = "DIR")]
    pub corpus: Option<PathBuf>,

    /// Review project (default: go.googlesource.com/go)
    #[arg(long, global = true, value_name = "SERVER/PROJECT")]
    pub project: Option<ProjectId>,

    /// Tracker repository (default: golang/go)
    #[arg(long, global = true, value_name = "OWNER/REPO")]
    pub repo: Option<RepoId>,

    /// Auxiliary column: milestone or urgency
    #[arg(long, global = true, value_name = "POLICY")]
    pub aux: Option<AuxPolicy>,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            corpus: self.corpus.clone(),
            project: self.project.clone(),
            repo: self.repo.clone(),
            aux: self.aux,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify every issue and write one CSV row per issue
    #[command(after_help = "Columns (no header row):\n  \
        number, updated, state, aux, labels, assignees, title\n\n\
        States, strongest first:\n  \
        closed, locked, waiting, deciding, pending, open")]
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List issue numbers referenced by an active, unrejected change
    Index,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
