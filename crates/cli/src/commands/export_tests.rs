// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use similar_asserts::assert_eq;
use triage_core::{
    AuxPolicy, Change, ChangeStatus, Issue, ProjectId, Records, RepoId, ReviewSnapshot,
};

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

fn export(ctx: &TestContext) -> (String, Summary) {
    let mut out = Vec::new();
    let summary = run_impl(&ctx.corpus(), &ctx.settings, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn exports_one_row_per_eligible_issue() {
    let mut ctx = TestContext::new();
    ctx.issue(1, "cmd/go: flaky test", |i| {
        i.with_label(1, "NeedsFix")
            .with_milestone("Go1.23")
            .with_assignee("rsc")
            .with_assignee("adg")
    })
    .issue(2, "go/types: clarify shifts", |i| i.with_label(0, "NeedsDecision"))
    .issue(3, "old and closed", |i| i.closed())
    .issue(4, "untouched", |i| i)
    .change(100, 1);

    let (csv, summary) = export(&ctx);
    assert_eq!(
        csv,
        "1,2024-03-01,pending,Go1.23,needsfix,\"adg,rsc\",cmd/go: flaky test\n\
         2,2024-03-01,deciding,,,,go/types: clarify shifts\n\
         3,2024-03-01,closed,,,,old and closed\n\
         4,2024-03-01,open,,,,untouched\n"
    );
    assert_eq!(summary.exported, 4);
    assert_eq!(summary.count(State::Pending), 1);
}

#[test]
fn empty_repository_writes_nothing() {
    let ctx = TestContext::new();
    let (csv, summary) = export(&ctx);
    assert_eq!(csv, "");
    assert_eq!(summary.exported, 0);
}

#[test]
fn titles_are_quoted_when_needed() {
    let mut ctx = TestContext::new();
    ctx.issue(7, "x/net: \"quoted\", with comma", |i| i)
        .issue(8, "line\nbreak", |i| i);

    let (csv, _) = export(&ctx);
    assert_eq!(
        csv,
        "7,2024-03-01,open,,,,\"x/net: \"\"quoted\"\", with comma\"\n\
         8,2024-03-01,open,,,,\"line\nbreak\"\n"
    );
}

#[test]
fn skipped_issues_are_counted_not_written() {
    let mut ctx = TestContext::new();
    ctx.issue(1, "pr", |mut i| {
        i.pull_request = true;
        i
    })
    .issue(2, "gone", |mut i| {
        i.not_exist = true;
        i
    })
    .issue(3, "frozen", |i| i.locked().with_label(398069301, "FrozenDueToAge"))
    .issue(4, "kept", |i| i);

    let (csv, summary) = export(&ctx);
    assert_eq!(csv, "4,2024-03-01,open,,,,kept\n");
    assert_eq!(summary.skipped_total(), 3);
    assert_eq!(summary.skipped.get("frozen"), Some(&1));
}

#[test]
fn rejected_change_does_not_mark_pending() {
    let mut ctx = TestContext::new();
    let repo = ctx.settings.target.repo.clone();
    ctx.issue(9, "blocked fix", |i| i).push_change(
        Change::new(200, ChangeStatus::New)
            .with_ref(&repo, 9)
            .with_snapshot(ReviewSnapshot::default().with_vote("Code-Review", -2)),
    );

    let (csv, _) = export(&ctx);
    assert_eq!(csv, "9,2024-03-01,open,,,,blocked fix\n");
}

#[test]
fn urgency_policy_fills_aux_column() {
    let mut ctx = TestContext::new();
    ctx.settings.rules.aux = AuxPolicy::Urgency;
    ctx.issue(1, "blocker", |i| {
        i.with_label(0, "release-blocker").with_milestone("Go1.24")
    })
    .issue(2, "docs", |i| i.with_label(0, "Documentation"));

    let (csv, _) = export(&ctx);
    assert_eq!(
        csv,
        "1,2024-03-01,open,Go1.24,release-blocker,,blocker\n\
         2,2024-03-01,open,doc,documentation,,docs\n"
    );
}

#[test]
fn missing_repository_is_a_setup_error() {
    let mut ctx = TestContext::new();
    ctx.settings.target.repo = RepoId::new("golang", "nope");
    let mut out = Vec::new();
    let err = run_impl(&ctx.corpus(), &ctx.settings, &mut out).unwrap_err();
    assert!(err.is_setup());
    assert!(out.is_empty());
}

/// Yields its issues, then fails.
struct FailingCorpus {
    project: ProjectId,
    issues: Vec<Issue>,
}

impl Corpus for FailingCorpus {
    fn changes(&self, project: &ProjectId) -> triage_core::Result<Records<'_, Change>> {
        assert_eq!(project, &self.project);
        Ok(Box::new(std::iter::empty()))
    }

    fn issues(&self, _repo: &RepoId) -> triage_core::Result<Records<'_, Issue>> {
        let failure = triage_core::Error::Iteration {
            path: PathBuf::from("issues.jsonl"),
            line: 3,
            source: Box::new(triage_core::Error::Io(std::io::Error::other("disk gone"))),
        };
        Ok(Box::new(
            self.issues
                .iter()
                .cloned()
                .map(Ok)
                .chain(std::iter::once(Err(failure))),
        ))
    }
}

#[test]
fn iteration_error_keeps_written_prefix() {
    let mut ctx = TestContext::new();
    ctx.issue(1, "first", |i| i).issue(2, "second", |i| i);
    let corpus = FailingCorpus {
        project: ctx.settings.target.project.clone(),
        issues: ctx.issues.clone(),
    };

    let mut out = Vec::new();
    let err = run_impl(&corpus, &ctx.settings, &mut out).unwrap_err();
    assert!(matches!(err, Error::Core(_)));
    assert!(!err.is_setup());
    assert!(err.to_string().contains("issues.jsonl:3"));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1,2024-03-01,open,,,,first\n2,2024-03-01,open,,,,second\n"
    );
}
