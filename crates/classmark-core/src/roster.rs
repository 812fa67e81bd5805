// SPDX-License-Identifier: Apache-2.0

//! Roster index: the bidirectional name/username lookup.
//!
//! The roster is a headerless two-column CSV, column 0 the student's
//! display name and column 1 their GitHub username, one row per student.
//! It is loaded once at startup and read-only for the rest of the run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ClassmarkError;

/// Bidirectional lookup between student display names and usernames.
#[derive(Debug, Default)]
pub struct Roster {
    name_to_username: HashMap<String, String>,
    username_to_name: HashMap<String, String>,
}

impl Roster {
    /// Loads a roster from a headerless two-column CSV file.
    ///
    /// Later rows overwrite earlier ones on duplicate keys, so duplicates
    /// resolve deterministically to the last occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::RosterLoad`] when the file cannot be opened
    /// or is not valid CSV, and [`ClassmarkError::RosterFormat`] when a row
    /// has fewer than two fields.
    pub fn load(path: &Path) -> Result<Self, ClassmarkError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| load_error(path, &e))?;

        let mut roster = Roster::default();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| load_error(path, &e))?;
            let row = index + 1;
            let name = record.get(0).ok_or_else(|| short_row(row))?;
            let username = record.get(1).ok_or_else(|| short_row(row))?;
            roster
                .name_to_username
                .insert(name.to_string(), username.to_string());
            roster
                .username_to_name
                .insert(username.to_string(), name.to_string());
        }

        debug!(
            path = %path.display(),
            students = roster.name_to_username.len(),
            "Loaded roster"
        );
        Ok(roster)
    }

    /// Looks up the username for a display name.
    #[must_use]
    pub fn username_for(&self, name: &str) -> Option<&str> {
        self.name_to_username.get(name).map(String::as_str)
    }

    /// Looks up the display name for a username.
    #[must_use]
    pub fn name_for(&self, username: &str) -> Option<&str> {
        self.username_to_name.get(username).map(String::as_str)
    }

    /// Number of students in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.name_to_username.len()
    }

    /// Returns true if the roster has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_to_username.is_empty()
    }
}

fn load_error(path: &Path, err: &csv::Error) -> ClassmarkError {
    ClassmarkError::RosterLoad {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

fn short_row(row: usize) -> ClassmarkError {
    ClassmarkError::RosterFormat {
        row,
        message: "expected at least two fields (name, username)".to_string(),
    }
}
