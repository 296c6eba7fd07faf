mod actions;
mod app;
mod ui;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::actions::execute_action;
use crate::app::App;

#[derive(Debug, Parser)]
#[command(name = "greeter-tui", version, about = "Workshop auto-grader greeting form")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = greeter_config::load(args.config).with_context(|| "load config")?;
    let mut app = App::new(&config);

    // init installs a panic hook that restores the terminal before unwinding.
    let mut terminal = ratatui::init();
    let result = run_form(&mut terminal, &mut app);
    ratatui::restore();
    result
}

/// Blocks on one terminal event per pass; the form has nothing to do between
/// key presses.
fn run_form(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit {
        while let Some(action) = app.next_action() {
            if let Err(err) = execute_action(app, action) {
                app.set_error(format!("{:#}", err));
            }
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
