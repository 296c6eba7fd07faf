use anyhow::{Context as _, Result};
use clap::{Arg, Args, CommandFactory, ValueHint};
use clap_complete::{generate, generate_to, Shell};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Print completions for the greeter-tui form instead of greeter
    #[arg(long, conflicts_with = "out_dir")]
    pub tui: bool,
    /// Write completion files for both binaries into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    if let Some(dir) = args.out_dir {
        fs::create_dir_all(&dir)
            .with_context(|| format!("create completions directory {}", dir.display()))?;
        for mut cmd in [crate::Cli::command(), form_command()] {
            let name = cmd.get_name().to_string();
            let path = generate_to(args.shell, &mut cmd, &name, &dir)
                .with_context(|| format!("write {} completions to {}", name, dir.display()))?;
            println!("{}", path.display());
        }
        return Ok(());
    }

    let mut cmd = if args.tui {
        form_command()
    } else {
        crate::Cli::command()
    };
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout().lock());
    Ok(())
}

/// Flags accepted by the greeter-tui binary, which is built in its own crate.
fn form_command() -> clap::Command {
    clap::Command::new("greeter-tui")
        .about("Workshop auto-grader greeting form")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
}
