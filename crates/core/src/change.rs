// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Review-side types: code changes, their status and their vote history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::link::{IssueRef, RepoId};
use crate::refs::change_refs;

/// Lifecycle status of a change in the review system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Open for review.
    #[serde(alias = "open")]
    New,
    /// Work in progress, not yet sent for review.
    Draft,
    Merged,
    Abandoned,
    /// Any status this mirror does not know about.
    #[serde(other)]
    Other,
}

impl ChangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::New => "new",
            ChangeStatus::Draft => "draft",
            ChangeStatus::Merged => "merged",
            ChangeStatus::Abandoned => "abandoned",
            ChangeStatus::Other => "other",
        }
    }

    /// Returns true unless the change has been merged or abandoned.
    pub fn is_active(&self) -> bool {
        !matches!(self, ChangeStatus::Merged | ChangeStatus::Abandoned)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The votes recorded on a change as of one review event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    /// Review dimension (e.g. `Code-Review`) to every vote cast on it.
    #[serde(default)]
    pub votes: BTreeMap<String, Vec<i32>>,
}

impl ReviewSnapshot {
    /// Votes on one dimension; empty if nobody voted on it.
    pub fn votes_for(&self, dimension: &str) -> &[i32] {
        self.votes.get(dimension).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records a vote (builder pattern).
    pub fn with_vote(mut self, dimension: &str, value: i32) -> Self {
        self.votes
            .entry(dimension.to_string())
            .or_default()
            .push(value);
        self
    }
}

/// A proposed code revision under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub number: u32,
    pub status: ChangeStatus,
    /// Review history, oldest first.
    #[serde(default)]
    pub metas: Vec<ReviewSnapshot>,
    /// Issues this change references, as resolved by the mirror.
    #[serde(default)]
    pub issue_refs: Vec<IssueRef>,
    /// Change description; references are also parsed out of it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Change {
    pub fn new(number: u32, status: ChangeStatus) -> Self {
        Change {
            number,
            status,
            metas: Vec::new(),
            issue_refs: Vec::new(),
            message: String::new(),
        }
    }

    /// The most recent review snapshot, if the change has any history.
    pub fn latest_snapshot(&self) -> Option<&ReviewSnapshot> {
        self.metas.last()
    }

    /// Issue numbers this change references in `repo`, ascending.
    ///
    /// Counts both resolved links and references written in the message;
    /// a bare `#N` in the message refers to `repo`.
    pub fn refs_in(&self, repo: &RepoId) -> Vec<u32> {
        change_refs(self, repo)
            .into_iter()
            .filter(|r| &r.repo == repo)
            .map(|r| r.number)
            .collect()
    }

    /// Adds a reference (builder pattern).
    pub fn with_ref(mut self, repo: &RepoId, number: u32) -> Self {
        self.issue_refs.push(IssueRef::new(repo.clone(), number));
        self
    }

    /// Appends a review snapshot (builder pattern).
    pub fn with_snapshot(mut self, snapshot: ReviewSnapshot) -> Self {
        self.metas.push(snapshot);
        self
    }

    /// Sets the description (builder pattern).
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
