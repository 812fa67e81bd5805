// SPDX-License-Identifier: Apache-2.0

//! Octocrab-backed implementation of the repository directory facade.

use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::models::Repository;
use tracing::{debug, instrument};

use super::{DirectoryListError, REPO_PAGE_SIZE, RepoDirectory, RepoHandle};
use crate::error::ClassmarkError;

/// Repository directory backed by the GitHub REST API.
pub struct GitHubDirectory {
    client: Octocrab,
}

impl GitHubDirectory {
    /// Wraps an already-authenticated octocrab client.
    #[must_use]
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepoDirectory for GitHubDirectory {
    #[instrument(skip(self), fields(org = %org))]
    async fn list_all_repositories(
        &self,
        org: &str,
    ) -> Result<Vec<RepoHandle>, DirectoryListError> {
        let mut fetched = Vec::new();

        let mut page = match self
            .client
            .orgs(org)
            .list_repos()
            .per_page(REPO_PAGE_SIZE)
            .send()
            .await
        {
            Ok(page) => page,
            Err(e) => {
                return Err(DirectoryListError {
                    fetched,
                    source: ClassmarkError::from(e),
                });
            }
        };

        loop {
            fetched.extend(
                page.take_items()
                    .iter()
                    .map(|repo| RepoHandle::from_repository(org, repo)),
            );

            match self.client.get_page::<Repository>(&page.next).await {
                Ok(Some(next)) => page = next,
                Ok(None) => break,
                Err(e) => {
                    return Err(DirectoryListError {
                        fetched,
                        source: ClassmarkError::from(e),
                    });
                }
            }
        }

        debug!(repos = fetched.len(), "Listed organization repositories");
        Ok(fetched)
    }

    #[instrument(skip(self), fields(org = %org, repo = %exact_name))]
    async fn get_repository(
        &self,
        org: &str,
        exact_name: &str,
    ) -> Result<RepoHandle, ClassmarkError> {
        let repo = self
            .client
            .repos(org, exact_name)
            .get()
            .await
            .map_err(|e| ClassmarkError::from_octocrab(e, org, exact_name))?;

        Ok(RepoHandle::from_repository(org, &repo))
    }

    #[instrument(skip(self, body), fields(org = %org, repo = %repo))]
    async fn create_issue(
        &self,
        org: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<String, ClassmarkError> {
        let issue = self
            .client
            .issues(org, repo)
            .create(title)
            .body(body)
            .send()
            .await?;

        debug!(number = issue.number, "Created feedback issue");
        Ok(issue.html_url.to_string())
    }
}
