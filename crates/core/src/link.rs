// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identities on both sides of a cross-tracker link.
//!
//! A code review change lives in a review-system project ([`ProjectId`]) and
//! points at issues in a tracker repository ([`RepoId`]). An [`IssueRef`] is
//! one such directed edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A tracker repository, written `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentity {
            what: "repository",
            value: s.to_string(),
            expected: "owner/repo",
        };
        let (owner, repo) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(RepoId::new(owner, repo))
    }
}

impl TryFrom<String> for RepoId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RepoId> for String {
    fn from(id: RepoId) -> Self {
        id.to_string()
    }
}

/// A review-system project, written `server/project`.
///
/// Only the first `/` separates the server; project names may be nested
/// (`go.googlesource.com/build/tools` is server `go.googlesource.com`,
/// project `build/tools`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId {
    pub server: String,
    pub project: String,
}

impl ProjectId {
    pub fn new(server: impl Into<String>, project: impl Into<String>) -> Self {
        ProjectId {
            server: server.into(),
            project: project.into(),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.server, self.project)
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentity {
            what: "project",
            value: s.to_string(),
            expected: "server/project",
        };
        let (server, project) = s.split_once('/').ok_or_else(invalid)?;
        if server.is_empty() || project.is_empty() || project.split('/').any(str::is_empty) {
            return Err(invalid());
        }
        Ok(ProjectId::new(server, project))
    }
}

impl TryFrom<String> for ProjectId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.to_string()
    }
}

/// A reference from a change to an issue in some repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IssueRef {
    pub repo: RepoId,
    pub number: u32,
}

impl IssueRef {
    pub fn new(repo: RepoId, number: u32) -> Self {
        IssueRef { repo, number }
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo, self.number)
    }
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
