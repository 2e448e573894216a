// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) file utilities.
//!
//! Corpus files are read one record per line, lazily, so a snapshot with
//! hundreds of thousands of issues never has to sit in memory at once.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Streaming reader over a JSONL file.
///
/// Yields one deserialized record per non-empty line. A line that cannot be
/// read or parsed yields an [`Error::Iteration`] naming the file and line.
pub struct JsonlReader<T, R = BufReader<File>> {
    path: PathBuf,
    lines: Lines<R>,
    line: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Opens `path` for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(JsonlReader::new(path, BufReader::new(file)))
    }
}

impl<T: DeserializeOwned, R: BufRead> JsonlReader<T, R> {
    /// Wraps an already-open reader; `path` is only used in error messages.
    pub fn new(path: &Path, reader: R) -> Self {
        JsonlReader {
            path: path.to_path_buf(),
            lines: reader.lines(),
            line: 0,
            _record: PhantomData,
        }
    }

    fn located(&self, source: Error) -> Error {
        Error::Iteration {
            path: self.path.clone(),
            line: self.line,
            source: Box::new(source),
        }
    }
}

impl<T: DeserializeOwned, R: BufRead> Iterator for JsonlReader<T, R> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(self.located(e.into()))),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str(&line).map_err(|e| self.located(e.into())));
        }
    }
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
