// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Providers of changes and issues.
//!
//! A [`Corpus`] hands out every change of a review project and every issue of
//! a tracker repository as a fallible stream. Looking up a project or
//! repository that the corpus does not have fails before iteration starts;
//! errors while reading come out of the stream itself.
//!
//! On-disk snapshots ([`SnapshotDir`]) are laid out as:
//!
//! ```text
//! <root>/gerrit/<server>/<project>/changes.jsonl
//! <root>/github/<owner>/<repo>/issues.jsonl
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::change::Change;
use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::jsonl::JsonlReader;
use crate::link::{ProjectId, RepoId};

const GERRIT_DIR: &str = "gerrit";
const GITHUB_DIR: &str = "github";
const CHANGES_FILE: &str = "changes.jsonl";
const ISSUES_FILE: &str = "issues.jsonl";

/// A stream of records that may fail part-way.
pub type Records<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

/// Read-only source of changes and issues.
pub trait Corpus {
    /// Every change in `project`, in corpus order.
    fn changes(&self, project: &ProjectId) -> Result<Records<'_, Change>>;

    /// Every issue in `repo`, in corpus order.
    fn issues(&self, repo: &RepoId) -> Result<Records<'_, Issue>>;
}

/// A corpus snapshot stored as JSONL files under one directory.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    root: PathBuf,
}

impl SnapshotDir {
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::CorpusNotFound(root.to_path_buf()));
        }
        Ok(SnapshotDir {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn changes_path(&self, project: &ProjectId) -> PathBuf {
        let mut path = self.root.join(GERRIT_DIR).join(&project.server);
        for segment in project.project.split('/') {
            path.push(segment);
        }
        path.join(CHANGES_FILE)
    }

    pub fn issues_path(&self, repo: &RepoId) -> PathBuf {
        self.root
            .join(GITHUB_DIR)
            .join(&repo.owner)
            .join(&repo.repo)
            .join(ISSUES_FILE)
    }
}

impl Corpus for SnapshotDir {
    fn changes(&self, project: &ProjectId) -> Result<Records<'_, Change>> {
        let path = self.changes_path(project);
        if !path.is_file() {
            return Err(Error::ProjectNotFound(project.to_string()));
        }
        tracing::debug!(path = %path.display(), "reading changes");
        Ok(Box::new(JsonlReader::<Change>::open(&path)?))
    }

    fn issues(&self, repo: &RepoId) -> Result<Records<'_, Issue>> {
        let path = self.issues_path(repo);
        if !path.is_file() {
            return Err(Error::RepoNotFound(repo.to_string()));
        }
        tracing::debug!(path = %path.display(), "reading issues");
        Ok(Box::new(JsonlReader::<Issue>::open(&path)?))
    }
}

/// A corpus held in memory, for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    changes: HashMap<ProjectId, Vec<Change>>,
    issues: HashMap<RepoId, Vec<Issue>>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a project with its changes (builder pattern).
    pub fn with_changes(mut self, project: ProjectId, changes: Vec<Change>) -> Self {
        self.changes.entry(project).or_default().extend(changes);
        self
    }

    /// Registers a repository with its issues (builder pattern).
    pub fn with_issues(mut self, repo: RepoId, issues: Vec<Issue>) -> Self {
        self.issues.entry(repo).or_default().extend(issues);
        self
    }
}

impl Corpus for MemoryCorpus {
    fn changes(&self, project: &ProjectId) -> Result<Records<'_, Change>> {
        let changes = self
            .changes
            .get(project)
            .ok_or_else(|| Error::ProjectNotFound(project.to_string()))?;
        Ok(Box::new(changes.iter().cloned().map(Ok)))
    }

    fn issues(&self, repo: &RepoId) -> Result<Records<'_, Issue>> {
        let issues = self
            .issues
            .get(repo)
            .ok_or_else(|| Error::RepoNotFound(repo.to_string()))?;
        Ok(Box::new(issues.iter().cloned().map(Ok)))
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
