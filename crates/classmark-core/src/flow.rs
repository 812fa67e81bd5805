// SPDX-License-Identifier: Apache-2.0

//! Top-level orchestration of a grading run.
//!
//! Two strategies share the same collaborators: a single-student run
//! resolves one identity and fetches one repository; an all-students run
//! lists the organization, filters by the assignment prefix, and drives
//! one session per repository in listing order. The mode is decided once
//! at startup and never changes.

use tracing::warn;

use crate::audit::AuditLog;
use crate::browser::Browser;
use crate::error::ClassmarkError;
use crate::github::RepoDirectory;
use crate::naming;
use crate::prompt::Prompt;
use crate::roster::Roster;
use crate::session::Session;

/// How the student is identified in single-student mode.
#[derive(Debug, Clone)]
pub enum StudentSelector {
    /// The student's display name, as saved in the roster.
    ByName(String),
    /// The student's GitHub username.
    ByUsername(String),
}

/// The two run strategies, fixed for the process invocation.
#[derive(Debug, Clone)]
pub enum RunMode {
    /// Handle one student's repository.
    SingleStudent(StudentSelector),
    /// Handle every repository matching the assignment prefix.
    AllStudents,
}

/// Drives one grading run over explicitly constructed services.
pub struct FlowController<'a> {
    /// Repository directory client.
    pub directory: &'a dyn RepoDirectory,
    /// Browser launcher.
    pub browser: &'a dyn Browser,
    /// Operator input.
    pub prompt: &'a dyn Prompt,
    /// Name/username roster, read-only for the run.
    pub roster: &'a Roster,
    /// Classroom organization.
    pub org: &'a str,
    /// Assignment prefix.
    pub prefix: &'a str,
    /// Whether to collect and publish feedback.
    pub collect_feedback: bool,
}

impl FlowController<'_> {
    /// Runs the grading flow for the given mode.
    ///
    /// # Errors
    ///
    /// Any error terminates the current unit of work: a single-student run
    /// aborts entirely, an all-students run aborts the whole batch on the
    /// first unrecoverable error. There is no skip-and-continue.
    pub async fn run(&self, mode: RunMode, audit: &mut AuditLog) -> Result<(), ClassmarkError> {
        match mode {
            RunMode::SingleStudent(selector) => self.run_single(selector, audit).await,
            RunMode::AllStudents => self.run_all(audit).await,
        }
    }

    fn session(&self, pace_between: bool) -> Session<'_> {
        Session {
            directory: self.directory,
            browser: self.browser,
            prompt: self.prompt,
            collect_feedback: self.collect_feedback,
            pace_between,
        }
    }

    /// Resolves one student and handles their repository.
    ///
    /// A name with no roster username is fatal - there is no repository to
    /// look up. A username with no roster name is a soft-fail handled by
    /// the session with a sentinel name.
    async fn run_single(
        &self,
        selector: StudentSelector,
        audit: &mut AuditLog,
    ) -> Result<(), ClassmarkError> {
        let (username, display_name) = match selector {
            StudentSelector::ByName(name) => {
                let username = self
                    .roster
                    .username_for(&name)
                    .ok_or_else(|| ClassmarkError::IdentityResolution { name: name.clone() })?
                    .to_string();
                (username, Some(name))
            }
            StudentSelector::ByUsername(username) => {
                let display_name = self.roster.name_for(&username).map(ToString::to_string);
                (username, display_name)
            }
        };

        let repo = self
            .directory
            .get_repository(self.org, &naming::repo_name(self.prefix, &username))
            .await?;

        self.session(false)
            .handle(&repo, &username, display_name.as_deref(), audit)
            .await
    }

    /// Handles every repository in the organization that matches the
    /// assignment prefix, in the order the directory listing returned
    /// them.
    async fn run_all(&self, audit: &mut AuditLog) -> Result<(), ClassmarkError> {
        let repos = match self.directory.list_all_repositories(self.org).await {
            Ok(repos) => repos,
            Err(e) => {
                // Partial listings are discarded: the batch aborts rather
                // than grading an unknown subset of students.
                warn!(
                    fetched = e.fetched.len(),
                    "Organization listing failed part-way"
                );
                return Err(e.source);
            }
        };

        let repos = naming::filter_by_prefix(repos, self.prefix);
        let session = self.session(true);

        for repo in &repos {
            let username = naming::username_from_repo_name(&repo.name, self.prefix)?;
            let display_name = self.roster.name_for(&username).map(ToString::to_string);
            session
                .handle(repo, &username, display_name.as_deref(), audit)
                .await?;
        }

        Ok(())
    }
}
