// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the classmark CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log output goes to stderr so prompts and repository headers on stdout
//! stay clean. The `RUST_LOG` environment variable overrides the default
//! filter.
//!
//! # Examples
//!
//! ```bash
//! # Debug output for troubleshooting
//! RUST_LOG=classmark=debug classmark -p hw1- -a
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// The `-v` flag raises the default filter to debug level for classmark
/// crates; `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "classmark=debug,octocrab=warn"
    } else {
        "classmark=warn,octocrab=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
