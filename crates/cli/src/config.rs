// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! Configuration is read from TOML and covers:
//! - `corpus`: directory holding the snapshot (relative paths resolve against
//!   the config file's directory)
//! - `project` / `repo`: which review project and tracker repository to join
//! - `aux`, `skip_frozen`, `[review]`, `[[labels]]`: classification rules
//!
//! Lookup order: `--config <path>`, then `triage.toml` in the working
//! directory, then `<config dir>/triage/config.toml`. With no file at all the
//! Go project defaults apply. Command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use triage_core::{
    AuxPolicy, LabelKey, LabelRole, LabelRules, ProjectId, RepoId, ReviewRule, Rules, Target,
};

use crate::error::{Error, Result};

const LOCAL_CONFIG_NAME: &str = "triage.toml";
const USER_CONFIG_DIR: &str = "triage";
const USER_CONFIG_NAME: &str = "config.toml";

/// Configuration as written in `triage.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Snapshot directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,
    /// Review project, `server/project`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectId>,
    /// Tracker repository, `owner/repo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoId>,
    /// `milestone` or `urgency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux: Option<AuxPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_frozen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewRule>,
    /// Replaces the built-in label table when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<LabelEntry>,
}

/// One `[[labels]]` row: exactly one of `id` or `name`, plus a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: LabelRole,
}

impl LabelEntry {
    fn to_rule(&self) -> Result<(LabelKey, LabelRole)> {
        let key = match (&self.id, &self.name) {
            (Some(id), None) => LabelKey::Id(*id),
            (None, Some(name)) if !name.trim().is_empty() => LabelKey::Name(name.clone()),
            _ => {
                return Err(Error::Config(format!(
                    "label entry for role '{}' needs exactly one of id or name",
                    self.role
                )))
            }
        };
        Ok((key, self.role))
    }
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub corpus: Option<PathBuf>,
    pub project: Option<ProjectId>,
    pub repo: Option<RepoId>,
    pub aux: Option<AuxPolicy>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub corpus: PathBuf,
    pub target: Target,
    pub rules: Rules,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        if let Some(corpus) = config.corpus.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.corpus = Some(if corpus.is_relative() {
                base.join(corpus)
            } else {
                corpus
            });
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Finds and loads the configuration for a run started in `cwd`.
    ///
    /// An explicit path must exist. Otherwise the first existing candidate
    /// from [`candidate_paths`] is used, or the defaults if there is none.
    /// `user_dir` is the user configuration directory, usually
    /// [`user_config_dir`].
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
        user_dir: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Config::load(path);
        }
        match candidate_paths(cwd, user_dir).into_iter().find(|p| p.is_file()) {
            Some(path) => Config::load(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Merges file values, command-line overrides and defaults.
    pub fn resolve(self, overrides: Overrides) -> Result<Settings> {
        let corpus = overrides
            .corpus
            .or(self.corpus)
            .ok_or(Error::NoCorpus)?;

        let defaults = Target::golang();
        let target = Target {
            project: overrides
                .project
                .or(self.project)
                .unwrap_or(defaults.project),
            repo: overrides.repo.or(self.repo).unwrap_or(defaults.repo),
        };

        let mut rules = Rules::golang();
        if !self.labels.is_empty() {
            let entries = self
                .labels
                .iter()
                .map(LabelEntry::to_rule)
                .collect::<Result<Vec<_>>>()?;
            rules.labels = LabelRules::new(entries);
        }
        if let Some(aux) = overrides.aux.or(self.aux) {
            rules.aux = aux;
        }
        if let Some(skip_frozen) = self.skip_frozen {
            rules.skip_frozen = skip_frozen;
        }
        if let Some(review) = self.review {
            rules.review = review;
        }

        Ok(Settings {
            corpus,
            target,
            rules,
        })
    }
}

/// The platform's user configuration directory.
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

/// Config files consulted when none is given explicitly, in order.
pub fn candidate_paths(cwd: &Path, user_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(LOCAL_CONFIG_NAME)];
    if let Some(dir) = user_dir {
        paths.push(dir.join(USER_CONFIG_DIR).join(USER_CONFIG_NAME));
    }
    paths
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
