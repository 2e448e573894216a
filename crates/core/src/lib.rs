// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! triage-core: classification engine for tracker issues.
//!
//! Combines an issue tracker's labels with cross-referenced code review
//! changes to derive one workflow state per issue.
//!
//! # Main Components
//!
//! - [`ReferenceIndex`] - issues referenced by an active, unrejected change
//! - [`Classifier`] - folds flags, labels and the index into a [`Record`]
//! - [`Rules`] - label roles, auxiliary policy and the blocking vote
//! - [`Corpus`] - where changes and issues come from ([`SnapshotDir`], [`MemoryCorpus`])
//! - [`pass::run`] - index then classify, in that order

pub mod change;
pub mod classify;
pub mod corpus;
pub mod error;
pub mod index;
pub mod issue;
pub mod jsonl;
pub mod link;
pub mod pass;
pub mod refs;
pub mod rules;

pub use change::{Change, ChangeStatus, ReviewSnapshot};
pub use classify::{Classifier, Record, SkipReason, State, Urgency};
pub use corpus::{Corpus, MemoryCorpus, Records, SnapshotDir};
pub use error::{Error, ErrorKind, Result};
pub use index::ReferenceIndex;
pub use issue::{Assignee, Issue, Label, Milestone};
pub use link::{IssueRef, ProjectId, RepoId};
pub use pass::{Summary, Target};
pub use rules::{AuxPolicy, LabelKey, LabelRole, LabelRules, ReviewRule, Rules};
