// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::change::ChangeStatus;
use yare::parameterized;

fn go() -> RepoId {
    RepoId::new("golang", "go")
}

fn numbers(message: &str) -> Vec<String> {
    parse_issue_refs(message, &go())
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[parameterized(
    fixes = { "cmd/go: fix thing\n\nFixes #123", &["golang/go#123"] },
    updates = { "Updates #45\nFor #46", &["golang/go#45", "golang/go#46"] },
    explicit_repo = { "Fixes golang/vscode-go#7", &["golang/vscode-go#7"] },
    start_of_text = { "#9 is the issue", &["golang/go#9"] },
    parenthesized = { "see (#10)", &["golang/go#10"] },
    duplicates = { "Updates #5\nFixes #5", &["golang/go#5"] },
    sorted = { "Fixes #30, #4", &["golang/go#4", "golang/go#30"] },
)]
fn parses_references(message: &str, expected: &[&str]) {
    assert_eq!(numbers(message), expected);
}

#[parameterized(
    empty = { "" },
    no_refs = { "runtime: tidy up" },
    glued = { "abc#12" },
    trailing_letters = { "Fixes #12abc" },
    zero = { "Fixes #0" },
    overflow = { "Fixes #99999999999" },
    bare_hash = { "use # for comments" },
)]
fn ignores_non_references(message: &str) {
    assert!(numbers(message).is_empty(), "{message:?}");
}

#[test]
fn change_refs_merges_links_and_message() {
    let change = Change::new(1, ChangeStatus::New)
        .with_ref(&go(), 42)
        .with_ref(&RepoId::new("golang", "tools"), 3)
        .with_message("Fixes #42\nUpdates #43");

    let refs: Vec<String> = change_refs(&change, &go())
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(refs, vec!["golang/go#42", "golang/go#43", "golang/tools#3"]);
}

#[test]
fn change_refs_without_message_keeps_links() {
    let change = Change::new(1, ChangeStatus::New).with_ref(&go(), 8);
    assert_eq!(change_refs(&change, &go()), vec![IssueRef::new(go(), 8)]);
}
