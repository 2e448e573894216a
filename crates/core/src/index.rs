// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index of issues that have an in-flight fix.
//!
//! One pass over a project's changes produces the set of issue numbers in the
//! target repository referenced by at least one qualifying change. A change
//! qualifies when it is still active, references the target repository, and
//! its latest review snapshot holds no rejecting vote.

use std::collections::BTreeSet;

use crate::change::Change;
use crate::error::Result;
use crate::link::RepoId;
use crate::rules::ReviewRule;

/// Issue numbers with at least one qualifying referencing change.
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    issues: BTreeSet<u32>,
}

impl ReferenceIndex {
    /// Builds the index from every change of one project.
    ///
    /// The first error yielded by `changes` aborts the build; no partial
    /// index is returned.
    pub fn build<I>(changes: I, repo: &RepoId, rule: &ReviewRule) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Change>>,
    {
        let mut issues = BTreeSet::new();
        let mut scanned = 0usize;
        let mut qualified = 0usize;

        for change in changes {
            let change = change?;
            scanned += 1;

            let refs = qualifying_refs(&change, repo, rule);
            if refs.is_empty() {
                continue;
            }
            qualified += 1;
            tracing::trace!(change = change.number, ?refs, "change qualifies");
            issues.extend(refs);
        }

        tracing::debug!(
            scanned,
            qualified,
            issues = issues.len(),
            "reference index built"
        );
        Ok(ReferenceIndex { issues })
    }

    /// Returns true if a qualifying change references issue `number`.
    pub fn contains(&self, number: u32) -> bool {
        self.issues.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Indexed issue numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.issues.iter().copied()
    }
}

impl FromIterator<u32> for ReferenceIndex {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        ReferenceIndex {
            issues: iter.into_iter().collect(),
        }
    }
}

/// Returns true if `change` contributes to the index for `repo`.
pub fn qualifies(change: &Change, repo: &RepoId, rule: &ReviewRule) -> bool {
    !qualifying_refs(change, repo, rule).is_empty()
}

/// Numbers in `repo` that `change` contributes; empty if it does not qualify.
fn qualifying_refs(change: &Change, repo: &RepoId, rule: &ReviewRule) -> Vec<u32> {
    if !change.status.is_active() {
        return Vec::new();
    }

    let numbers = change.refs_in(repo);
    if numbers.is_empty() || is_blocked(change, rule) {
        return Vec::new();
    }
    numbers
}

/// Only the latest snapshot counts; earlier rejections may have been lifted.
fn is_blocked(change: &Change, rule: &ReviewRule) -> bool {
    change.latest_snapshot().is_some_and(|snapshot| {
        snapshot
            .votes_for(&rule.dimension)
            .iter()
            .any(|&vote| vote <= rule.reject)
    })
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
