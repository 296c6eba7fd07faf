use crate::commands::{print_json, Context, SubmissionArgs};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use greeter_config::{write_script, OutputError};
use greeter_core::{handle_submit, GreetingScript};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub submission: SubmissionArgs,
    /// Output file, or a directory to place workshop_greeting.sql in
    #[arg(long, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,
    /// Print the script instead of writing a file
    #[arg(long)]
    pub stdout: bool,
    /// Replace an existing script file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    file: Option<String>,
    mime_type: &'static str,
    greeting_call: &'a str,
    sql: &'a str,
}

pub fn generate(ctx: &Context<'_>, args: GenerateArgs) -> Result<()> {
    let input = args.submission.into_input()?;
    let script = handle_submit(&input)?;

    if args.stdout {
        if ctx.json {
            return print_json(&report(&script, None));
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(script.as_bytes())?;
        return Ok(());
    }

    let out = resolve_output_path(args.out, ctx.config.script_path(), &script);
    let overwrite = args.force || ctx.config.overwrite;
    write_script(&out, script.as_bytes(), overwrite).map_err(|err| match err {
        OutputError::Exists(_) => invalid_input(format!("{} (use --force to replace it)", err)),
        other => other.into(),
    })?;
    debug!(path = %out.display(), bytes = script.as_bytes().len(), "script written");

    if ctx.json {
        return print_json(&report(&script, Some(out.as_path())));
    }

    println!("Script written to {}", out.display());
    println!("{}", script.greeting_call);
    Ok(())
}

fn report<'a>(script: &'a GreetingScript, out: Option<&Path>) -> GenerateReport<'a> {
    GenerateReport {
        file: out.map(|path| path.display().to_string()),
        mime_type: script.mime_type(),
        greeting_call: &script.greeting_call,
        sql: &script.sql,
    }
}

fn resolve_output_path(out: Option<PathBuf>, default: PathBuf, script: &GreetingScript) -> PathBuf {
    match out {
        Some(path) if path.is_dir() => path.join(script.file_name()),
        Some(path) => path,
        None => default,
    }
}
