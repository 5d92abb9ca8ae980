//! Interactive prompts (behind the `interactive` feature).
//!
//! Prompts only run on a real terminal; every caller must have a
//! non-interactive fallback so scripted runs never block on stdin.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::cli::Language;
use crate::error::{CliError, CliResult};

/// Ask the user to pick a project language.
pub fn select_language() -> CliResult<Language> {
    let choices = [Language::JavaScript, Language::TypeScript];
    let labels = ["JavaScript", "TypeScript"];

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which language should the project use?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(choices[index])
}

/// Ask the user to confirm before writing to disk.
pub fn confirm_scaffold(project_name: &str) -> CliResult<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Create project '{project_name}'?"))
        .default(true)
        .interact()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "interactive prompt failed".into(),
        source: std::io::Error::other(err),
    }
}
