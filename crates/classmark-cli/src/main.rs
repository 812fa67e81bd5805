// SPDX-License-Identifier: Apache-2.0

//! classmark - grade GitHub Classroom assignments from the command line.
//!
//! Locates student repositories by assignment prefix, opens them in the
//! browser, and optionally publishes grader feedback as issues.

mod cli;
mod errors;
mod logging;
mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use classmark_core::github::auth;
use classmark_core::{AuditLog, FlowController, GitHubDirectory, Roster, SystemBrowser};
use console::style;
use tracing::debug;

use crate::cli::Cli;
use crate::prompt::TerminalPrompt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", style("Error:").red().bold(), errors::format_error(&e));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    // Flag validation happens before configuration or any network access.
    if cli.prefix.is_empty() {
        return Err(classmark_core::ClassmarkError::Config {
            message: "assignment prefix must not be empty".to_string(),
        }
        .into());
    }
    let mode = cli.run_mode()?;

    let config = classmark_core::load_config().context("Failed to load configuration")?;
    let settings = config.into_settings()?;
    debug!(org = %settings.org, "Configuration loaded");

    let roster = Roster::load(&settings.roster_path)?;
    let mut audit = AuditLog::open(&settings.log_dir, &cli.prefix)?;

    let client = auth::create_client(&settings.token)?;
    let directory = GitHubDirectory::new(client);
    let browser = SystemBrowser;
    let prompt = TerminalPrompt;

    let controller = FlowController {
        directory: &directory,
        browser: &browser,
        prompt: &prompt,
        roster: &roster,
        org: &settings.org,
        prefix: &cli.prefix,
        collect_feedback: cli.feedback,
    };

    controller.run(mode, &mut audit).await?;
    Ok(())
}
