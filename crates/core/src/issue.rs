// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker-side types: issues and the labels, milestones and assignees
//! attached to them.
//!
//! These mirror the records of a GitHub-style tracker as stored in a corpus
//! snapshot. They are read-only inputs to classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A label as the tracker reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Stable numeric identifier; survives renames.
    #[serde(default)]
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl Label {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Label {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Login name. The tracker occasionally records assignees without one.
    #[serde(default)]
    pub login: String,
}

/// An issue (or pull request) in the tracked repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u32,
    /// Tombstone marker for numbers that were deleted or never existed.
    #[serde(default)]
    pub not_exist: bool,
    /// The tracker shares one number space between issues and pull requests.
    #[serde(default)]
    pub pull_request: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub locked: bool,
    /// When the issue was last modified.
    #[serde(default)]
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
}

impl Issue {
    /// Creates an open, unlabeled issue.
    pub fn new(number: u32, title: impl Into<String>, updated: DateTime<Utc>) -> Self {
        Issue {
            number,
            not_exist: false,
            pull_request: false,
            closed: false,
            locked: false,
            updated,
            title: title.into(),
            milestone: None,
            labels: Vec::new(),
            assignees: Vec::new(),
        }
    }

    /// Title of the milestone, if one is set.
    pub fn milestone_title(&self) -> Option<&str> {
        self.milestone.as_ref().map(|m| m.title.as_str())
    }

    /// Sets the closed flag (builder pattern).
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Sets the locked flag (builder pattern).
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Adds a label (builder pattern).
    pub fn with_label(mut self, id: u64, name: &str) -> Self {
        self.labels.push(Label::new(id, name));
        self
    }

    /// Sets the milestone (builder pattern).
    pub fn with_milestone(mut self, title: &str) -> Self {
        self.milestone = Some(Milestone {
            title: title.to_string(),
        });
        self
    }

    /// Adds an assignee (builder pattern).
    pub fn with_assignee(mut self, login: &str) -> Self {
        self.assignees.push(Assignee {
            login: login.to_string(),
        });
        self
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
