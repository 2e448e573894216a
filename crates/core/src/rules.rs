// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The rule table that drives classification.
//!
//! Special labels are looked up in an explicit `(LabelKey, LabelRole)` table
//! instead of being compared by name at each use site. A key is either the
//! tracker's numeric label ID, which survives renames, or a display name
//! matched case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Label;

/// How a special label is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelKey {
    Id(u64),
    Name(String),
}

impl LabelKey {
    pub fn matches(&self, label: &Label) -> bool {
        match self {
            LabelKey::Id(id) => label.id == *id,
            LabelKey::Name(name) => label.name.eq_ignore_ascii_case(name),
        }
    }
}

/// What a special label means to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelRole {
    /// Maintainers are waiting on the reporter.
    WaitingForInfo,
    /// Proposal parked until something else happens.
    ProposalHold,
    /// Needs a decision from maintainers.
    NeedsDecision,
    /// Set by the bot that locks old closed issues.
    FrozenDueToAge,
    ReleaseBlocker,
    EarlyInCycle,
    FeatureRequest,
    Testing,
    Documentation,
}

impl LabelRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelRole::WaitingForInfo => "waiting-for-info",
            LabelRole::ProposalHold => "proposal-hold",
            LabelRole::NeedsDecision => "needs-decision",
            LabelRole::FrozenDueToAge => "frozen-due-to-age",
            LabelRole::ReleaseBlocker => "release-blocker",
            LabelRole::EarlyInCycle => "early-in-cycle",
            LabelRole::FeatureRequest => "feature-request",
            LabelRole::Testing => "testing",
            LabelRole::Documentation => "documentation",
        }
    }

    /// State-determining labels are consumed by classification and never
    /// appear in the exported label list.
    pub fn is_state_determining(&self) -> bool {
        matches!(
            self,
            LabelRole::WaitingForInfo | LabelRole::ProposalHold | LabelRole::NeedsDecision
        )
    }
}

impl fmt::Display for LabelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which derived value fills the auxiliary column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxPolicy {
    /// Milestone title, or empty.
    #[default]
    Milestone,
    /// Urgency tag derived from labels (`release`, `early`, `feature`, ...).
    Urgency,
}

impl AuxPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuxPolicy::Milestone => "milestone",
            AuxPolicy::Urgency => "urgency",
        }
    }
}

impl fmt::Display for AuxPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuxPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "milestone" => Ok(AuxPolicy::Milestone),
            "urgency" => Ok(AuxPolicy::Urgency),
            _ => Err(Error::InvalidIdentity {
                what: "auxiliary policy",
                value: s.to_string(),
                expected: "milestone or urgency",
            }),
        }
    }
}

/// Which vote blocks a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRule {
    /// Primary review dimension.
    pub dimension: String,
    /// Most negative allowed value on that dimension.
    pub reject: i32,
}

impl Default for ReviewRule {
    fn default() -> Self {
        ReviewRule {
            dimension: "Code-Review".to_string(),
            reject: -2,
        }
    }
}

/// Ordered label table. The first entry matching a label wins, with ID keys
/// taking precedence over name keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRules {
    entries: Vec<(LabelKey, LabelRole)>,
}

impl LabelRules {
    pub fn new(entries: Vec<(LabelKey, LabelRole)>) -> Self {
        LabelRules { entries }
    }

    /// Role of `label`, or `None` for an ordinary label.
    pub fn role_of(&self, label: &Label) -> Option<LabelRole> {
        let by_id = self
            .entries
            .iter()
            .find(|(key, _)| matches!(key, LabelKey::Id(_)) && key.matches(label));
        by_id
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| matches!(key, LabelKey::Name(_)) && key.matches(label))
            })
            .map(|(_, role)| *role)
    }

    pub fn entries(&self) -> &[(LabelKey, LabelRole)] {
        &self.entries
    }
}

// Label IDs on github.com/golang/go.
const WAITING_FOR_INFO_ID: u64 = 357033853;
const PROPOSAL_HOLD_ID: u64 = 477156222;
const NEEDS_DECISION_ID: u64 = 373401956;
const FROZEN_DUE_TO_AGE_ID: u64 = 398069301;

/// Everything the indexer and classifier need besides the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub labels: LabelRules,
    pub aux: AuxPolicy,
    /// Drop issues that are locked and carry a frozen-due-to-age label.
    pub skip_frozen: bool,
    pub review: ReviewRule,
}

impl Rules {
    /// Rules for the Go project's tracker.
    pub fn golang() -> Self {
        Rules {
            labels: LabelRules::new(vec![
                (LabelKey::Id(WAITING_FOR_INFO_ID), LabelRole::WaitingForInfo),
                (LabelKey::Id(PROPOSAL_HOLD_ID), LabelRole::ProposalHold),
                (LabelKey::Id(NEEDS_DECISION_ID), LabelRole::NeedsDecision),
                (LabelKey::Id(FROZEN_DUE_TO_AGE_ID), LabelRole::FrozenDueToAge),
                // Name fallbacks for snapshots without label IDs.
                (
                    LabelKey::Name("WaitingForInfo".into()),
                    LabelRole::WaitingForInfo,
                ),
                (
                    LabelKey::Name("Proposal-Hold".into()),
                    LabelRole::ProposalHold,
                ),
                (
                    LabelKey::Name("NeedsDecision".into()),
                    LabelRole::NeedsDecision,
                ),
                (
                    LabelKey::Name("FrozenDueToAge".into()),
                    LabelRole::FrozenDueToAge,
                ),
                (
                    LabelKey::Name("release-blocker".into()),
                    LabelRole::ReleaseBlocker,
                ),
                (
                    LabelKey::Name("early-in-cycle".into()),
                    LabelRole::EarlyInCycle,
                ),
                (
                    LabelKey::Name("FeatureRequest".into()),
                    LabelRole::FeatureRequest,
                ),
                (LabelKey::Name("Testing".into()), LabelRole::Testing),
                (
                    LabelKey::Name("Documentation".into()),
                    LabelRole::Documentation,
                ),
            ]),
            aux: AuxPolicy::default(),
            skip_frozen: true,
            review: ReviewRule::default(),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::golang()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
