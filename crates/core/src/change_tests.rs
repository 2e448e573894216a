// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    new = { "\"new\"", ChangeStatus::New },
    open_alias = { "\"open\"", ChangeStatus::New },
    draft = { "\"draft\"", ChangeStatus::Draft },
    merged = { "\"merged\"", ChangeStatus::Merged },
    abandoned = { "\"abandoned\"", ChangeStatus::Abandoned },
    unknown = { "\"submitted\"", ChangeStatus::Other },
)]
fn status_deserialize(json: &str, expected: ChangeStatus) {
    assert_eq!(serde_json::from_str::<ChangeStatus>(json).unwrap(), expected);
}

#[parameterized(
    new = { ChangeStatus::New, true },
    draft = { ChangeStatus::Draft, true },
    other = { ChangeStatus::Other, true },
    merged = { ChangeStatus::Merged, false },
    abandoned = { ChangeStatus::Abandoned, false },
)]
fn status_is_active(status: ChangeStatus, expected: bool) {
    assert_eq!(status.is_active(), expected);
}

#[test]
fn latest_snapshot_is_last() {
    let change = Change::new(1, ChangeStatus::New)
        .with_snapshot(ReviewSnapshot::default().with_vote("Code-Review", -2))
        .with_snapshot(ReviewSnapshot::default().with_vote("Code-Review", 1));
    assert_eq!(
        change.latest_snapshot().unwrap().votes_for("Code-Review"),
        &[1]
    );
}

#[test]
fn latest_snapshot_none_without_history() {
    assert!(Change::new(1, ChangeStatus::New).latest_snapshot().is_none());
}

#[test]
fn votes_for_missing_dimension_is_empty() {
    let snap = ReviewSnapshot::default().with_vote("Run-TryBot", 1);
    assert!(snap.votes_for("Code-Review").is_empty());
}

#[test]
fn refs_in_filters_by_repo() {
    let go = RepoId::new("golang", "go");
    let vscode = RepoId::new("golang", "vscode-go");
    let change = Change::new(9, ChangeStatus::New)
        .with_ref(&go, 1)
        .with_ref(&vscode, 2)
        .with_ref(&go, 3);

    assert_eq!(change.refs_in(&go), vec![1, 3]);
    assert_eq!(change.refs_in(&vscode), vec![2]);
}

#[test]
fn refs_in_includes_message_references() {
    let go = RepoId::new("golang", "go");
    let change = Change::new(10, ChangeStatus::New)
        .with_ref(&go, 12)
        .with_message("net/http: retry\n\nFixes #77\nUpdates golang/tools#5\nFor #12");

    assert_eq!(change.refs_in(&go), vec![12, 77]);
    assert_eq!(change.refs_in(&RepoId::new("golang", "tools")), vec![5]);
}

#[test]
fn deserialize_change_record() {
    let json = r#"{
        "number": 501234,
        "status": "new",
        "metas": [{"votes": {"Code-Review": [2, -1]}}, {}],
        "issue_refs": [{"repo": "golang/go", "number": 42}]
    }"#;
    let change: Change = serde_json::from_str(json).unwrap();
    assert_eq!(change.metas.len(), 2);
    assert!(change.latest_snapshot().unwrap().votes.is_empty());
    assert_eq!(change.issue_refs[0].number, 42);
    assert!(change.message.is_empty());
}
