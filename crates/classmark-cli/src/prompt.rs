// SPDX-License-Identifier: Apache-2.0

//! Terminal-backed operator prompts.
//!
//! Implements the core `Prompt` seam with `dialoguer`. Both prompts are
//! single blocking line reads; read failures propagate without retry.

use classmark_core::{ClassmarkError, Prompt};
use dialoguer::Input;

/// [`Prompt`] implementation reading from the interactive terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn feedback(&self) -> Result<String, ClassmarkError> {
        let text: String = Input::new()
            .with_prompt("Enter any feedback for student (leave empty to skip)")
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }

    fn pause(&self) -> Result<(), ClassmarkError> {
        let _: String = Input::new()
            .with_prompt("Press enter to continue")
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;
        Ok(())
    }
}

fn input_error(err: dialoguer::Error) -> ClassmarkError {
    ClassmarkError::Input {
        message: err.to_string(),
    }
}
