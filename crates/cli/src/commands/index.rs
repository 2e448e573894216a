// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use triage_core::{pass, Corpus};

use crate::config::Settings;
use crate::error::Result;

use super::open_corpus;

pub fn run(settings: &Settings) -> Result<()> {
    let corpus = open_corpus(settings)?;
    run_impl(&corpus, settings, &mut std::io::stdout().lock())
}

/// Writes each indexed issue number on its own line, ascending.
pub(crate) fn run_impl<C, W>(corpus: &C, settings: &Settings, out: &mut W) -> Result<()>
where
    C: Corpus + ?Sized,
    W: Write,
{
    let index = pass::build_index(corpus, &settings.target, &settings.rules)?;
    for number in index.iter() {
        writeln!(out, "{}", number)?;
    }
    out.flush()?;
    tracing::info!(project = %settings.target.project, issues = index.len(), "indexed changes");
    Ok(())
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
