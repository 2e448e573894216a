// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the triage CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] triage_core::Error),

    #[error("no corpus configured\n  hint: pass --corpus <dir>, set TRIAGE_CORPUS, or set corpus in triage.toml")]
    NoCorpus,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// True if the run could not start at all (nothing was written).
    pub fn is_setup(&self) -> bool {
        match self {
            Error::Core(e) => e.kind() == triage_core::ErrorKind::Setup,
            Error::NoCorpus | Error::Config(_) => true,
            Error::Io(_) | Error::Csv(_) => false,
        }
    }
}

/// A specialized Result type for triage CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
