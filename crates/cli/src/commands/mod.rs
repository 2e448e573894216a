// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod export;
pub mod index;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use triage_core::SnapshotDir;

use crate::config::Settings;
use crate::error::Result;

/// Helper to open the snapshot named by the resolved settings.
pub fn open_corpus(settings: &Settings) -> Result<SnapshotDir> {
    let corpus = SnapshotDir::open(&settings.corpus)?;
    tracing::debug!(root = %corpus.root().display(), "opened corpus");
    Ok(corpus)
}
