// SPDX-License-Identifier: Apache-2.0

//! Authenticated GitHub client construction.
//!
//! The bearer token is supplied once at construction, from configuration,
//! and held as a [`SecretString`] until handed to octocrab.

use anyhow::{Context, Result};
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Creates an authenticated Octocrab client from a personal token.
///
/// # Errors
///
/// Returns an error if the Octocrab client cannot be built.
pub fn create_client(token: &SecretString) -> Result<Octocrab> {
    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .build()
        .context("Failed to build GitHub client")?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}
