// SPDX-License-Identifier: Apache-2.0

//! Append-only audit log of posted feedback.
//!
//! One file per assignment prefix under the configured log directory,
//! opened once for the process lifetime. Each successful feedback post
//! appends a single timestamped line with name, username, and the
//! feedback text. There is no integrity guarantee on write failure
//! beyond propagating the error.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::error::ClassmarkError;

/// Single-writer, append-only feedback log.
#[derive(Debug)]
pub struct AuditLog {
    file: File,
    path: PathBuf,
}

impl AuditLog {
    /// Opens (creating if needed) the audit log for one assignment prefix.
    ///
    /// The file lives at `<log_dir>/<prefix>.log`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::AuditLog`] if the file cannot be opened
    /// for appending.
    pub fn open(log_dir: &Path, prefix: &str) -> Result<Self, ClassmarkError> {
        let path = log_dir.join(format!("{prefix}.log"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| ClassmarkError::AuditLog {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "Opened audit log");
        Ok(Self { file, path })
    }

    /// Appends one feedback event line.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::AuditLog`] if the write fails.
    pub fn record(
        &mut self,
        name: &str,
        username: &str,
        feedback: &str,
    ) -> Result<(), ClassmarkError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        writeln!(
            self.file,
            "{timestamp} Name: {name}, Username: {username}, Feedback: {feedback}"
        )
        .map_err(|source| ClassmarkError::AuditLog {
            path: self.path.clone(),
            source,
        })
    }

    /// Path of the underlying log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
