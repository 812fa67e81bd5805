// SPDX-License-Identifier: Apache-2.0

//! Repository naming convention for GitHub Classroom.
//!
//! Classroom repositories follow the naming standard
//! `{assignment prefix}{username}`, e.g. `assignment-3-brighton1101`.
//! Both directions of that convention live here: building a repository
//! name from a prefix and username, and recovering the username from a
//! repository name.

use crate::error::ClassmarkError;
use crate::github::RepoHandle;

/// Builds a repository name from an assignment prefix and a username.
///
/// Pure concatenation, no normalization of case or whitespace -
/// callers must pre-sanitize.
#[must_use]
pub fn repo_name(prefix: &str, username: &str) -> String {
    format!("{prefix}{username}")
}

/// Recovers the username from a repository name by stripping the prefix.
///
/// # Errors
///
/// Returns [`ClassmarkError::NamingMismatch`] when `repo_name` does not
/// start with `prefix`. Stripping anywhere but the front would silently
/// corrupt the username when the prefix recurs elsewhere in the name.
pub fn username_from_repo_name(repo_name: &str, prefix: &str) -> Result<String, ClassmarkError> {
    repo_name
        .strip_prefix(prefix)
        .map(ToString::to_string)
        .ok_or_else(|| ClassmarkError::NamingMismatch {
            repo: repo_name.to_string(),
            prefix: prefix.to_string(),
        })
}

/// Returns the repositories whose name contains `prefix` as a substring,
/// preserving input order.
///
/// Substring containment (not a leading-prefix check) matches how
/// assignment repositories have historically been grouped.
#[must_use]
pub fn filter_by_prefix(repos: Vec<RepoHandle>, prefix: &str) -> Vec<RepoHandle> {
    repos
        .into_iter()
        .filter(|repo| repo.name.contains(prefix))
        .collect()
}
