// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Classmark Core
//!
//! Core library for classmark - a grading assistant for GitHub Classroom.
//!
//! This crate provides the building blocks for a grading run:
//! - Roster index (bidirectional name/username lookup)
//! - Repository naming convention (prefix + username)
//! - Repository directory facade over the GitHub API
//! - Per-repository grading sessions and the two run strategies
//! - Configuration, audit logging, and error types
//!
//! ## Modules
//!
//! - [`audit`] - Append-only feedback log
//! - [`browser`] - OS browser launching
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`flow`] - Single-student and all-students orchestration
//! - [`github`] - GitHub API (auth, repository directory)
//! - [`naming`] - Repository naming convention
//! - [`prompt`] - Operator input seams
//! - [`roster`] - Roster loading and lookups
//! - [`session`] - Per-repository session handler

// ============================================================================
// Error Handling
// ============================================================================

pub use error::ClassmarkError;

/// Convenience Result type for classmark operations.
///
/// This is equivalent to `std::result::Result<T, ClassmarkError>`.
pub type Result<T> = std::result::Result<T, ClassmarkError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, Settings, config_dir, config_file_path, load_config};

// ============================================================================
// Roster and Naming
// ============================================================================

pub use naming::{filter_by_prefix, repo_name, username_from_repo_name};
pub use roster::Roster;

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{DirectoryListError, GitHubDirectory, RepoDirectory, RepoHandle};

// ============================================================================
// Orchestration
// ============================================================================

pub use flow::{FlowController, RunMode, StudentSelector};
pub use session::{FEEDBACK_TITLE, NAME_NOT_FOUND, Session};

// ============================================================================
// Collaborators
// ============================================================================

pub use audit::AuditLog;
pub use browser::{Browser, SystemBrowser};
pub use prompt::Prompt;

// ============================================================================
// Modules
// ============================================================================

pub mod audit;
pub mod browser;
pub mod config;
pub mod error;
pub mod flow;
pub mod github;
pub mod naming;
pub mod prompt;
pub mod roster;
pub mod session;
