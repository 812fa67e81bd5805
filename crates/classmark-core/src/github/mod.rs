// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides client construction and the repository directory facade the
//! flow controller talks to. The facade is a trait so orchestration code
//! can be exercised against an in-memory directory in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::ClassmarkError;

pub mod auth;
pub mod directory;

pub use directory::GitHubDirectory;

/// Page size used when listing organization repositories.
///
/// Classroom organizations tend to hold repositories in the hundreds
/// (one per student per assignment), so the maximum page size keeps the
/// number of sequential round trips small.
pub const REPO_PAGE_SIZE: u8 = 100;

/// A repository in the classroom organization.
///
/// Transient: produced by the directory client per call and consumed
/// immediately by the session handler, never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    /// Owning organization.
    pub org: String,
    /// Raw repository name.
    pub name: String,
    /// Browsable URL.
    pub url: String,
}

impl RepoHandle {
    /// Creates a handle with the canonical github.com URL.
    #[must_use]
    pub fn new(org: &str, name: &str) -> Self {
        Self {
            org: org.to_string(),
            name: name.to_string(),
            url: format!("https://github.com/{org}/{name}"),
        }
    }

    /// Converts an octocrab repository model into a handle.
    #[must_use]
    pub fn from_repository(org: &str, repo: &octocrab::models::Repository) -> Self {
        let url = repo
            .html_url
            .as_ref()
            .map_or_else(|| format!("https://github.com/{org}/{}", repo.name), ToString::to_string);
        Self {
            org: org.to_string(),
            name: repo.name.clone(),
            url,
        }
    }
}

/// Failure while paging through an organization listing.
///
/// Carries the repositories accumulated before the failure so the caller
/// can decide whether to proceed with a partial listing.
#[derive(Debug, Error)]
#[error("Listing failed after {} repositories: {source}", fetched.len())]
pub struct DirectoryListError {
    /// Repositories fetched from the pages that succeeded.
    pub fetched: Vec<RepoHandle>,
    /// The underlying directory failure.
    #[source]
    pub source: ClassmarkError,
}

/// Thin facade over the remote hosting API.
///
/// Every method is an independent, synchronous-in-spirit operation: the
/// implementation may page internally but callers see one blocking call.
#[async_trait]
pub trait RepoDirectory: Send + Sync {
    /// Returns every repository in the organization.
    ///
    /// Pages through the API until the server signals no further pages.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryListError`] with the repositories accumulated so
    /// far on any non-recoverable transport or authorization error.
    async fn list_all_repositories(&self, org: &str)
    -> Result<Vec<RepoHandle>, DirectoryListError>;

    /// Fetches one repository by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::RepositoryNotFound`] if no repository with
    /// that exact name exists, or [`ClassmarkError::DirectoryAccess`] for
    /// transport/auth failures.
    async fn get_repository(&self, org: &str, exact_name: &str)
    -> Result<RepoHandle, ClassmarkError>;

    /// Creates an issue on a repository and returns the created issue URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::DirectoryAccess`] on transport/auth failure
    /// or when the repository does not support issues (e.g. personal forks
    /// outside an organization). The failure is surfaced, never swallowed.
    async fn create_issue(
        &self,
        org: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<String, ClassmarkError>;
}
