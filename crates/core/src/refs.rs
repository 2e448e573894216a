// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue references written in change descriptions.
//!
//! Recognized forms:
//! - `#123` refers to issue 123 in the default repository
//! - `owner/repo#123` refers to issue 123 in `owner/repo`
//!
//! A reference must start the text or follow whitespace or `(`.

use regex::Regex;
use std::sync::LazyLock;

use crate::change::Change;
use crate::link::{IssueRef, RepoId};

// Hard-coded pattern, exercised by the tests below.
static ISSUE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?:^|[\s(])(?:([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+))?#(\d+)\b") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Extracts issue references from free text, sorted and deduplicated.
pub fn parse_issue_refs(message: &str, default_repo: &RepoId) -> Vec<IssueRef> {
    let mut refs: Vec<IssueRef> = ISSUE_REF_RE
        .captures_iter(message)
        .filter_map(|caps| {
            let number = caps.get(3)?.as_str().parse::<u32>().ok()?;
            if number == 0 {
                return None;
            }
            let repo = match (caps.get(1), caps.get(2)) {
                (Some(owner), Some(repo)) => RepoId::new(owner.as_str(), repo.as_str()),
                _ => default_repo.clone(),
            };
            Some(IssueRef::new(repo, number))
        })
        .collect();
    refs.sort();
    refs.dedup();
    refs
}

/// All references carried by a change: the mirror's resolved links plus
/// anything written in the description.
pub fn change_refs(change: &Change, default_repo: &RepoId) -> Vec<IssueRef> {
    let mut refs = change.issue_refs.clone();
    if !change.message.is_empty() {
        refs.extend(parse_issue_refs(&change.message, default_repo));
    }
    refs.sort();
    refs.dedup();
    refs
}

#[cfg(test)]
#[path = "refs_tests.rs"]
mod tests;
