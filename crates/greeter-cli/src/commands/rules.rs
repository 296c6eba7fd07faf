use crate::commands::{print_json, Context};
use anyhow::Result;
use greeter_core::RULES;

pub fn print_rules(ctx: &Context<'_>) -> Result<()> {
    if ctx.json {
        return print_json(&RULES);
    }
    for rule in RULES {
        println!("- {}", rule);
    }
    Ok(())
}
