// SPDX-License-Identifier: Apache-2.0

//! Launching the operating system's default browser.
//!
//! Fire-and-forget: the launch is not waited on beyond the initial
//! spawn error. A launch failure signals an environment-level problem
//! (e.g. no display), so callers treat it as fatal for the session.

use tracing::debug;

use crate::error::ClassmarkError;

/// Opens URLs for visual inspection.
pub trait Browser {
    /// Launches the platform-default handler on `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::BrowserLaunch`] if the handler cannot be
    /// spawned.
    fn open(&self, url: &str) -> Result<(), ClassmarkError>;
}

/// [`Browser`] backed by the platform-default URL handler.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ClassmarkError> {
        debug!(url, "Opening repository in browser");
        open::that_detached(url).map_err(|e| ClassmarkError::BrowserLaunch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
