// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue classification.
//!
//! Each eligible issue folds into exactly one [`State`]. Precedence, highest
//! first: closed, locked, waiting, deciding, pending, open. Every candidate
//! state has a rank (its position in the enum) and the highest candidate seen
//! wins, so the result never depends on the order labels are listed in.
//!
//! The urgency tag used by [`AuxPolicy::Urgency`] follows the same scheme with
//! its own ladder: release, early, feature, test, doc, none.

use chrono::NaiveDate;
use std::fmt;

use crate::index::ReferenceIndex;
use crate::issue::Issue;
use crate::rules::{AuxPolicy, LabelRole, Rules};

/// Derived workflow state, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Nothing else applies.
    Open,
    /// An active, unrejected change references the issue.
    Pending,
    /// Waiting on a maintainer decision.
    Deciding,
    /// Waiting on the reporter, or a proposal on hold.
    Waiting,
    Locked,
    Closed,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Pending => "pending",
            State::Deciding => "deciding",
            State::Waiting => "waiting",
            State::Locked => "locked",
            State::Closed => "closed",
        }
    }

    /// State forced by a label with `role`, if any.
    fn from_role(role: LabelRole) -> Option<State> {
        match role {
            LabelRole::WaitingForInfo | LabelRole::ProposalHold => Some(State::Waiting),
            LabelRole::NeedsDecision => Some(State::Deciding),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency tag, ordered weakest to strongest. A tag never downgrades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    #[default]
    None,
    Doc,
    Test,
    Feature,
    Early,
    Release,
}

impl Urgency {
    fn from_role(role: LabelRole) -> Urgency {
        match role {
            LabelRole::ReleaseBlocker => Urgency::Release,
            LabelRole::EarlyInCycle => Urgency::Early,
            LabelRole::FeatureRequest => Urgency::Feature,
            LabelRole::Testing => Urgency::Test,
            LabelRole::Documentation => Urgency::Doc,
            _ => Urgency::None,
        }
    }

    /// Tag text. A release blocker reports its milestone when it has one.
    pub fn tag<'a>(&self, milestone: Option<&'a str>) -> &'a str {
        match self {
            Urgency::Release => milestone.filter(|t| !t.is_empty()).unwrap_or("release"),
            Urgency::Early => "early",
            Urgency::Feature => "feature",
            Urgency::Test => "test",
            Urgency::Doc => "doc",
            Urgency::None => "",
        }
    }
}

/// Why an issue was left out of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    NotExist,
    PullRequest,
    /// Locked by the bot that freezes old issues.
    Frozen,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NotExist => "not-exist",
            SkipReason::PullRequest => "pull-request",
            SkipReason::Frozen => "frozen",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified issue, ready to be written as a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub number: u32,
    pub updated: NaiveDate,
    pub state: State,
    /// Milestone title or urgency tag, depending on the policy.
    pub aux: String,
    /// Lower-cased, sorted, without state-determining labels.
    pub labels: Vec<String>,
    /// Sorted logins.
    pub assignees: Vec<String>,
    pub title: String,
}

impl Record {
    /// Columns: number, updated, state, aux, labels, assignees, title.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.number.to_string(),
            self.updated.format("%Y-%m-%d").to_string(),
            self.state.as_str().to_string(),
            self.aux.clone(),
            self.labels.join(","),
            self.assignees.join(","),
            self.title.clone(),
        ]
    }
}

/// Classifies issues against a rule table and a finished reference index.
pub struct Classifier<'a> {
    rules: &'a Rules,
    index: &'a ReferenceIndex,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a Rules, index: &'a ReferenceIndex) -> Self {
        Classifier { rules, index }
    }

    /// Why `issue` is not exported, or `None` if it is eligible.
    pub fn skip_reason(&self, issue: &Issue) -> Option<SkipReason> {
        if issue.not_exist {
            return Some(SkipReason::NotExist);
        }
        if issue.pull_request {
            return Some(SkipReason::PullRequest);
        }
        if self.rules.skip_frozen && issue.locked && self.is_frozen(issue) {
            return Some(SkipReason::Frozen);
        }
        None
    }

    fn is_frozen(&self, issue: &Issue) -> bool {
        issue
            .labels
            .iter()
            .any(|l| self.rules.labels.role_of(l) == Some(LabelRole::FrozenDueToAge))
    }

    /// Classifies one issue. Returns `None` for ineligible issues; never fails.
    pub fn classify(&self, issue: &Issue) -> Option<Record> {
        if let Some(reason) = self.skip_reason(issue) {
            tracing::trace!(issue = issue.number, %reason, "skipped");
            return None;
        }

        let mut state = if issue.closed {
            Some(State::Closed)
        } else if issue.locked {
            Some(State::Locked)
        } else {
            None
        };
        let mut urgency = Urgency::None;
        let mut labels = Vec::with_capacity(issue.labels.len());

        for label in &issue.labels {
            let role = self.rules.labels.role_of(label);
            if let Some(role) = role {
                state = state.max(State::from_role(role));
                urgency = urgency.max(Urgency::from_role(role));
                if role.is_state_determining() {
                    continue;
                }
            }
            labels.push(label.name.to_lowercase());
        }
        labels.sort();

        // Pending only after every label had its say.
        let state = state.unwrap_or(if self.index.contains(issue.number) {
            State::Pending
        } else {
            State::Open
        });

        let aux = match self.rules.aux {
            AuxPolicy::Milestone => issue.milestone_title().unwrap_or_default(),
            AuxPolicy::Urgency => urgency.tag(issue.milestone_title()),
        };

        let mut assignees: Vec<String> = issue
            .assignees
            .iter()
            .filter(|a| !a.login.is_empty())
            .map(|a| a.login.clone())
            .collect();
        assignees.sort();

        Some(Record {
            number: issue.number,
            updated: issue.updated.date_naive(),
            state,
            aux: aux.to_string(),
            labels,
            assignees,
            title: issue.title.clone(),
        })
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
