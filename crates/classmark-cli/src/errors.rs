// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `ClassmarkError` and adds a hint for the
//! error types an operator can usually fix themselves. Structured error
//! data stays in the core crate; presentation lives here.

use anyhow::Error;
use classmark_core::ClassmarkError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `ClassmarkError`, returns the original error
/// message unchanged.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<ClassmarkError>() else {
        return error.to_string();
    };

    match err {
        ClassmarkError::Config { .. } => {
            format!(
                "{err}\n\nTip: Check your config file at {}",
                classmark_core::config_file_path().display()
            )
        }
        ClassmarkError::RosterLoad { .. } | ClassmarkError::RosterFormat { .. } => {
            format!(
                "{err}\n\nTip: The roster must be a two-column CSV of display name, username."
            )
        }
        ClassmarkError::IdentityResolution { .. } => {
            format!("{err}\n\nTip: Check the spelling against the roster, or pass --username.")
        }
        ClassmarkError::DirectoryAccess { .. } => {
            format!("{err}\n\nTip: Check your GitHub token and network connection.")
        }
        ClassmarkError::RepositoryNotFound { .. } => {
            format!(
                "{err}\n\nTip: Check the assignment prefix - the repository name is prefix + username."
            )
        }
        ClassmarkError::BrowserLaunch { .. } => {
            format!("{err}\n\nTip: Make sure a graphical session and a default browser are available.")
        }
        ClassmarkError::NamingMismatch { .. }
        | ClassmarkError::Input { .. }
        | ClassmarkError::AuditLog { .. } => err.to_string(),
    }
}
