use anyhow::{anyhow, Result};
use greeter_config::{write_script, OutputError};
use greeter_core::{handle_submit, SubmissionInput};

use crate::app::App;

#[derive(Debug, Clone)]
pub enum Action {
    Submit(SubmissionInput),
    SaveScript,
}

pub fn execute_action(app: &mut App, action: Action) -> Result<()> {
    match action {
        Action::Submit(input) => {
            match handle_submit(&input) {
                Ok(script) => app.apply_script(script),
                Err(failure) => app.apply_failure(failure),
            }
            app.clear_error();
        }
        Action::SaveScript => {
            let Some(script) = app.script() else {
                return Err(anyhow!("nothing to save yet; generate the script first"));
            };
            let mime_type = script.mime_type();
            let path = app.script_path.clone();
            write_script(&path, script.as_bytes(), app.overwrite).map_err(|err| match err {
                OutputError::Exists(_) => {
                    anyhow!("{}; set overwrite = true in the config to replace it", err)
                }
                other => other.into(),
            })?;
            app.clear_error();
            app.set_status(format!("Saved {} ({})", path.display(), mime_type));
        }
    }
    Ok(())
}
