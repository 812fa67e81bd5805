// SPDX-License-Identifier: Apache-2.0

//! Error types for classmark.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during classmark operations.
#[derive(Error, Debug)]
pub enum ClassmarkError {
    /// Missing or invalid settings, or mutually exclusive flags.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The roster file could not be opened or read.
    #[error("Could not load roster from {path}: {message}")]
    RosterLoad {
        /// Path to the roster file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// A roster row is not valid two-column data.
    #[error("Invalid roster row {row}: {message}")]
    RosterFormat {
        /// 1-based row number within the roster file.
        row: usize,
        /// Error message.
        message: String,
    },

    /// A display name could not be resolved to a username.
    #[error("Username for name {name:?} not found in roster")]
    IdentityResolution {
        /// The display name that failed to resolve.
        name: String,
    },

    /// A repository name does not start with the assignment prefix.
    #[error("Repository name {repo:?} does not start with prefix {prefix:?}")]
    NamingMismatch {
        /// The repository name.
        repo: String,
        /// The assignment prefix.
        prefix: String,
    },

    /// Transport, authorization, or pagination failure against the GitHub API.
    #[error("GitHub API error: {message}")]
    DirectoryAccess {
        /// Error message.
        message: String,
    },

    /// No repository with the given exact name exists in the organization.
    #[error("Repository {org}/{name} not found")]
    RepositoryNotFound {
        /// Organization name.
        org: String,
        /// Exact repository name that was requested.
        name: String,
    },

    /// Terminal read failure while prompting the operator.
    #[error("Input error: {message}")]
    Input {
        /// Error message.
        message: String,
    },

    /// The OS browser handler could not be launched.
    #[error("Could not open browser for {url}: {message}")]
    BrowserLaunch {
        /// The URL that was being opened.
        url: String,
        /// Error message.
        message: String,
    },

    /// The audit log could not be opened or written.
    #[error("Audit log error for {path}: {source}")]
    AuditLog {
        /// Path to the audit log file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ClassmarkError {
    /// Maps an octocrab error to the directory-client taxonomy.
    ///
    /// HTTP 404 becomes [`ClassmarkError::RepositoryNotFound`]; everything
    /// else becomes [`ClassmarkError::DirectoryAccess`].
    pub(crate) fn from_octocrab(err: octocrab::Error, org: &str, name: &str) -> Self {
        if let octocrab::Error::GitHub { source, .. } = &err
            && source.status_code.as_u16() == 404
        {
            return ClassmarkError::RepositoryNotFound {
                org: org.to_string(),
                name: name.to_string(),
            };
        }
        ClassmarkError::from(err)
    }
}

impl From<octocrab::Error> for ClassmarkError {
    fn from(err: octocrab::Error) -> Self {
        ClassmarkError::DirectoryAccess {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for ClassmarkError {
    fn from(err: config::ConfigError) -> Self {
        ClassmarkError::Config {
            message: err.to_string(),
        }
    }
}
