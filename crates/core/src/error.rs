// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for triage-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// A run either cannot start (`Setup`), fails part-way through reading the
/// corpus (`Iteration`), or was handed a malformed identifier (`Input`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Setup,
    Iteration,
    Input,
}

/// All possible errors that can occur in triage-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus not found: {}\n  hint: pass --corpus or set corpus in triage.toml", .0.display())]
    CorpusNotFound(PathBuf),

    #[error("project not found in corpus: {0}\n  hint: expected gerrit/<server>/<project>/changes.jsonl")]
    ProjectNotFound(String),

    #[error("repository not found in corpus: {0}\n  hint: expected github/<owner>/<repo>/issues.jsonl")]
    RepoNotFound(String),

    #[error("{}:{line}: {source}", .path.display())]
    Iteration {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid {what}: '{value}'\n  hint: expected {expected}")]
    InvalidIdentity {
        what: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns which phase of a run this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::CorpusNotFound(_) | Error::ProjectNotFound(_) | Error::RepoNotFound(_) => {
                ErrorKind::Setup
            }
            Error::Iteration { .. } | Error::Io(_) | Error::Json(_) => ErrorKind::Iteration,
            Error::InvalidIdentity { .. } => ErrorKind::Input,
        }
    }
}

/// A specialized Result type for triage-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
