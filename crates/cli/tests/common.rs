// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use chrono::{TimeZone, Utc};
use serde::Serialize;

pub use predicates::prelude::*;
pub use tempfile::TempDir;
pub use triage_core::{Change, ChangeStatus, Issue, ProjectId, RepoId, ReviewSnapshot};

/// The binary with a clean environment, so a developer's settings do not leak in.
pub fn triage() -> Command {
    let mut cmd = cargo_bin_cmd!("triage");
    cmd.env_remove("TRIAGE_CORPUS")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent/triage-test-config");
    cmd
}

pub fn go_project() -> ProjectId {
    ProjectId::new("go.googlesource.com", "go")
}

pub fn go_repo() -> RepoId {
    RepoId::new("golang", "go")
}

/// An open issue last updated on 2024-06-15.
pub fn issue(number: u32, title: &str) -> Issue {
    Issue::new(
        number,
        title,
        Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 0).unwrap(),
    )
}

/// An open change fixing `number` in golang/go.
pub fn fix(change: u32, number: u32) -> Change {
    Change::new(change, ChangeStatus::New).with_ref(&go_repo(), number)
}

/// A corpus snapshot in a temporary directory.
pub struct Snapshot {
    pub dir: TempDir,
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn changes(&self, project: &ProjectId, changes: &[Change]) -> &Self {
        let path = self
            .path()
            .join("gerrit")
            .join(&project.server)
            .join(&project.project)
            .join("changes.jsonl");
        write_jsonl(&path, changes);
        self
    }

    pub fn issues(&self, repo: &RepoId, issues: &[Issue]) -> &Self {
        let path = self
            .path()
            .join("github")
            .join(&repo.owner)
            .join(&repo.repo)
            .join("issues.jsonl");
        write_jsonl(&path, issues);
        self
    }

    /// Writes a file verbatim, relative to the snapshot root.
    pub fn raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut content = String::new();
    for record in records {
        content.push_str(&serde_json::to_string(record).unwrap());
        content.push('\n');
    }
    fs::write(path, content).unwrap();
}
