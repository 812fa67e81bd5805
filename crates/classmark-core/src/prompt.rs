// SPDX-License-Identifier: Apache-2.0

//! Operator input seams.
//!
//! The session handler reads two kinds of operator input: free-text
//! feedback, and the manual pacing gate between repositories in
//! all-students mode. Both are behind a trait so orchestration tests can
//! script the grader's answers. The terminal-backed implementation lives
//! in the CLI crate.

use crate::error::ClassmarkError;

/// Interactive operator input.
pub trait Prompt {
    /// Reads one line of free-text feedback, trimmed of trailing line
    /// terminators.
    ///
    /// Empty text after trimming is the grader's explicit opt-out and must
    /// not trigger issue creation or logging.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::Input`] if the terminal read fails. There
    /// is no retry.
    fn feedback(&self) -> Result<String, ClassmarkError>;

    /// Blocks until the operator presses enter.
    ///
    /// The pacing gate lets the grader review each repository before the
    /// next one opens.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::Input`] if the terminal read fails.
    fn pause(&self) -> Result<(), ClassmarkError>;
}
