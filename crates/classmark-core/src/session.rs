// SPDX-License-Identifier: Apache-2.0

//! Per-repository grading session.
//!
//! A session handles one repository, strictly sequentially: resolve the
//! display name, open the repository in the browser, optionally collect
//! and publish feedback, optionally wait for the pacing gate. There is
//! no branching back between steps.

use tracing::warn;

use crate::audit::AuditLog;
use crate::browser::Browser;
use crate::error::ClassmarkError;
use crate::github::{RepoDirectory, RepoHandle};
use crate::prompt::Prompt;

/// Title used for every published feedback issue.
pub const FEEDBACK_TITLE: &str = "[FEEDBACK]";

/// Sentinel display name when the roster has no entry for a username.
pub const NAME_NOT_FOUND: &str = "[NAME NOT FOUND]";

/// Handles one repository at a time with a fixed set of collaborators.
pub struct Session<'a> {
    /// Directory client, used for issue creation.
    pub directory: &'a dyn RepoDirectory,
    /// Browser launcher.
    pub browser: &'a dyn Browser,
    /// Operator input.
    pub prompt: &'a dyn Prompt,
    /// Whether to collect and publish feedback.
    pub collect_feedback: bool,
    /// Whether to block for the pacing gate between repositories
    /// (all-students mode with feedback disabled).
    pub pace_between: bool,
}

impl Session<'_> {
    /// Runs one grading session for `repo`.
    ///
    /// A missing display name is a soft-fail: the sentinel
    /// [`NAME_NOT_FOUND`] is substituted and processing continues. A
    /// browser-launch failure aborts the session before any feedback
    /// handling, and an issue-creation failure propagates to the caller.
    /// The audit-log line is written only after a successful issue
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error from the browser launch, the feedback
    /// prompt, issue creation, the audit-log write, or the pacing gate.
    pub async fn handle(
        &self,
        repo: &RepoHandle,
        username: &str,
        display_name: Option<&str>,
        audit: &mut AuditLog,
    ) -> Result<(), ClassmarkError> {
        let name = match display_name {
            Some(name) => name,
            None => {
                let extra = if self.collect_feedback {
                    " You can still post feedback below."
                } else {
                    ""
                };
                warn!(username, "Username not found in roster");
                println!("Note: username {username} not found in roster.{extra}");
                NAME_NOT_FOUND
            }
        };

        println!("{name} ({username}) -> {}", repo.url);
        self.browser.open(&repo.url)?;

        if self.collect_feedback {
            let feedback = self.prompt.feedback()?;
            // Empty text is the grader's opt-out: no issue, no log line.
            if !feedback.is_empty() {
                let issue_url = self
                    .directory
                    .create_issue(&repo.org, &repo.name, FEEDBACK_TITLE, &feedback)
                    .await?;
                println!("Feedback posted: {issue_url}");
                audit.record(name, username, &feedback)?;
            }
        } else if self.pace_between {
            self.prompt.pause()?;
        }

        Ok(())
    }
}
