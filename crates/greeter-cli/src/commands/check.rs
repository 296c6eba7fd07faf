use crate::commands::{print_json, Context, SubmissionArgs};
use anyhow::Result;
use clap::Args;
use greeter_core::{validate, FailureCategory};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub submission: SubmissionArgs,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    category: Option<FailureCategory>,
    errors: Vec<String>,
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let input = args.submission.into_input()?;
    let outcome = validate(&input);

    if ctx.json {
        let report = match &outcome {
            Ok(_) => CheckReport {
                valid: true,
                category: None,
                errors: Vec::new(),
            },
            Err(failure) => CheckReport {
                valid: false,
                category: Some(failure.category),
                errors: failure.messages(),
            },
        };
        print_json(&report)?;
    }

    outcome?;
    if !ctx.json {
        println!("ok");
    }
    Ok(())
}
