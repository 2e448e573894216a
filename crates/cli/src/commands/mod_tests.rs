// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Test infrastructure for running commands against an in-memory corpus.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     ctx.issue(1, "title", |i| i.with_label(1, "Testing"))
//!         .change(100, 1);
//!
//!     // Run command logic against ctx.corpus() and ctx.settings
//! }
//! ```

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use triage_core::{Change, ChangeStatus, Issue, MemoryCorpus, Rules, Target};

use crate::config::Settings;

/// Issues and changes for the Go target, plus the default settings.
pub struct TestContext {
    pub settings: Settings,
    pub changes: Vec<Change>,
    pub issues: Vec<Issue>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        TestContext {
            settings: Settings {
                corpus: PathBuf::from("/unused"),
                target: Target::golang(),
                rules: Rules::golang(),
            },
            changes: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Adds an issue last updated on 2024-03-01, shaped by `build`.
    pub fn issue(
        &mut self,
        number: u32,
        title: &str,
        build: impl FnOnce(Issue) -> Issue,
    ) -> &mut Self {
        let updated = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        self.issues.push(build(Issue::new(number, title, updated)));
        self
    }

    /// Adds an open change that fixes `issue` in the target repository.
    pub fn change(&mut self, number: u32, issue: u32) -> &mut Self {
        let change =
            Change::new(number, ChangeStatus::New).with_ref(&self.settings.target.repo, issue);
        self.changes.push(change);
        self
    }

    pub fn push_change(&mut self, change: Change) -> &mut Self {
        self.changes.push(change);
        self
    }

    pub fn corpus(&self) -> MemoryCorpus {
        MemoryCorpus::new()
            .with_changes(self.settings.target.project.clone(), self.changes.clone())
            .with_issues(self.settings.target.repo.clone(), self.issues.clone())
    }
}
