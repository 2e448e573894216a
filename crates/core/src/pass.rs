// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One full run over a corpus: index changes, then classify issues.
//!
//! The two passes are strictly sequential. The reference index is finished
//! before the first issue is looked at and is only read afterwards.

use std::collections::BTreeMap;

use crate::classify::{Classifier, Record, SkipReason, State};
use crate::corpus::Corpus;
use crate::error::Error;
use crate::index::ReferenceIndex;
use crate::link::{ProjectId, RepoId};
use crate::rules::Rules;

/// What a run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub project: ProjectId,
    pub repo: RepoId,
}

impl Target {
    /// The Go project on its Gerrit server and GitHub tracker.
    pub fn golang() -> Self {
        Target {
            project: ProjectId::new("go.googlesource.com", "go"),
            repo: RepoId::new("golang", "go"),
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::golang()
    }
}

/// Counts gathered during the classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub exported: usize,
    pub by_state: BTreeMap<State, usize>,
    pub skipped: BTreeMap<&'static str, usize>,
}

impl Summary {
    fn record(&mut self, state: State) {
        self.exported += 1;
        *self.by_state.entry(state).or_default() += 1;
    }

    fn skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason.as_str()).or_default() += 1;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn count(&self, state: State) -> usize {
        self.by_state.get(&state).copied().unwrap_or(0)
    }
}

/// Builds the reference index for `target`.
pub fn build_index<C: Corpus + ?Sized>(
    corpus: &C,
    target: &Target,
    rules: &Rules,
) -> crate::Result<ReferenceIndex> {
    let changes = corpus.changes(&target.project)?;
    ReferenceIndex::build(changes, &target.repo, &rules.review)
}

/// Runs both passes, handing each record to `sink` in issue order.
///
/// Setup errors surface before `sink` is ever called. The first iteration
/// error or sink error stops the run; records already handed out stay handed
/// out.
pub fn run<C, E, F>(corpus: &C, target: &Target, rules: &Rules, mut sink: F) -> Result<Summary, E>
where
    C: Corpus + ?Sized,
    E: From<Error>,
    F: FnMut(Record) -> Result<(), E>,
{
    // Both lookups happen up front so a missing repository is reported
    // before any work is done.
    let issues = corpus.issues(&target.repo)?;
    let index = build_index(corpus, target, rules)?;
    tracing::info!(
        project = %target.project,
        referenced = index.len(),
        "indexed changes"
    );

    let classifier = Classifier::new(rules, &index);
    let mut summary = Summary::default();
    for issue in issues {
        let issue = issue?;
        if let Some(reason) = classifier.skip_reason(&issue) {
            summary.skip(reason);
            continue;
        }
        if let Some(record) = classifier.classify(&issue) {
            summary.record(record.state);
            sink(record)?;
        }
    }

    tracing::info!(
        repo = %target.repo,
        exported = summary.exported,
        skipped = summary.skipped_total(),
        "classified issues"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "pass_tests.rs"]
mod tests;
