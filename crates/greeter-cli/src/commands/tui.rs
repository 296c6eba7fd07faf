use anyhow::{anyhow, bail, Context as _, Result};
use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Runs the interactive form and waits for it to exit.
pub fn launch(config_path: Option<PathBuf>) -> Result<()> {
    let binary = form_binary();
    debug!(binary = %binary.display(), "launching form");

    let mut command = Command::new(&binary);
    if let Some(path) = &config_path {
        command.arg("--config").arg(path);
    }

    let status = match command.status() {
        Ok(status) => status,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(anyhow!(
                "{} not found next to greeter or on PATH; build it with `cargo build -p greeter-tui`",
                binary.display()
            ));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("launch {}", binary.display()));
        }
    };
    if !status.success() {
        bail!("greeter-tui exited with {}", status);
    }
    Ok(())
}

// Prefer the binary installed alongside greeter, then fall back to PATH.
fn form_binary() -> PathBuf {
    let name = format!("greeter-tui{}", env::consts::EXE_SUFFIX);
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(&name))
}
