// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use triage_core::{pass, Corpus, Record, State, Summary};

use crate::config::Settings;
use crate::error::Result;

use super::open_corpus;

pub fn run(settings: &Settings, output: Option<&Path>) -> Result<()> {
    let corpus = open_corpus(settings)?;
    let summary = match output {
        Some(path) => {
            // Both lookups fail before the file is created.
            drop(corpus.changes(&settings.target.project)?);
            drop(corpus.issues(&settings.target.repo)?);
            let file = File::create(path)?;
            let summary = run_impl(&corpus, settings, file)?;
            tracing::info!(path = %path.display(), "wrote export");
            summary
        }
        None => run_impl(&corpus, settings, std::io::stdout().lock())?,
    };
    log_summary(&summary);
    Ok(())
}

/// Internal implementation that accepts any corpus and writer for testing.
pub(crate) fn run_impl<C, W>(corpus: &C, settings: &Settings, writer: W) -> Result<Summary>
where
    C: Corpus + ?Sized,
    W: Write,
{
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let result = pass::run(
        corpus,
        &settings.target,
        &settings.rules,
        |record: Record| -> Result<()> {
            csv.write_record(record.to_row())?;
            Ok(())
        },
    );

    // Rows written before a failure stay written.
    let flushed = csv.flush();
    let summary = result?;
    flushed?;
    Ok(summary)
}

fn log_summary(summary: &Summary) {
    for (reason, count) in &summary.skipped {
        tracing::info!(reason = *reason, count = *count, "skipped issues");
    }
    tracing::info!(
        exported = summary.exported,
        pending = summary.count(State::Pending),
        open = summary.count(State::Open),
        closed = summary.count(State::Closed),
        "export finished"
    );
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
