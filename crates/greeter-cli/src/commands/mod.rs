use anyhow::{Context as _, Result};
use clap::Args;
use greeter_config::AppConfig;
use greeter_core::SubmissionInput;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod generate;
pub mod rules;
pub mod tui;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

/// The four form fields, taken from flags or from a JSON file.
///
/// Values are passed through exactly as given; trimming is part of validation.
#[derive(Debug, Args)]
pub struct SubmissionArgs {
    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub email: Option<String>,
    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub first: Option<String>,
    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub middle: Option<String>,
    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub last: Option<String>,
    /// Read the fields from a JSON object with email/first/middle/last keys
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl SubmissionArgs {
    pub fn into_input(self) -> Result<SubmissionInput> {
        if let Some(path) = self.input {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read input file {}", path.display()))?;
            let input: SubmissionInput = serde_json::from_str(&contents)
                .map_err(|err| crate::error::invalid_input(format!("{}: {}", path.display(), err)))?;
            return Ok(input);
        }
        Ok(SubmissionInput {
            email: self.email.unwrap_or_default(),
            first: self.first.unwrap_or_default(),
            middle: self.middle.unwrap_or_default(),
            last: self.last.unwrap_or_default(),
        })
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
