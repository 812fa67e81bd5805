// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for classmark.
//!
//! Uses clap's derive API. The surface is a single flat command: one
//! required assignment prefix, one way of picking a student (display
//! name, username, or everyone), and a feedback switch.

use clap::Parser;
use classmark_core::{ClassmarkError, RunMode, StudentSelector};

/// Grade GitHub Classroom assignments from the command line.
///
/// Opens each student repository in the browser and optionally collects
/// free-text feedback, publishing it as an issue on the repository.
#[derive(Parser)]
#[command(name = "classmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Assignment prefix of the repository names, e.g. 'assignment-2-'
    #[arg(long, short = 'p')]
    pub prefix: String,

    /// The student's full name, as saved in the roster
    #[arg(long, short = 'n', conflicts_with = "username")]
    pub name: Option<String>,

    /// The student's GitHub username
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Collect feedback and post it as an issue on the repository
    #[arg(long, short = 'f')]
    pub feedback: bool,

    /// Handle every student with the given prefix, not a single student
    #[arg(long, short = 'a', conflicts_with_all = ["name", "username"])]
    pub all: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Derives the run mode from the parsed flags.
    ///
    /// Clap already rejects `--name` together with `--username` (and
    /// either together with `--all`); this adds the remaining check that
    /// single-student mode names exactly one student.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::Config`] when neither a student nor
    /// `--all` was given.
    pub fn run_mode(&self) -> Result<RunMode, ClassmarkError> {
        if self.all {
            return Ok(RunMode::AllStudents);
        }
        if let Some(name) = &self.name {
            return Ok(RunMode::SingleStudent(StudentSelector::ByName(
                name.clone(),
            )));
        }
        if let Some(username) = &self.username {
            return Ok(RunMode::SingleStudent(StudentSelector::ByUsername(
                username.clone(),
            )));
        }
        Err(ClassmarkError::Config {
            message: "supply exactly one of --name or --username, or use --all".to_string(),
        })
    }
}
