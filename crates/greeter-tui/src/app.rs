use std::collections::VecDeque;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use greeter_config::AppConfig;
use greeter_core::{GreetingScript, SubmissionInput, ValidationFailure};

use crate::actions::Action;

const SCROLL_PAGE: u16 = 10;
pub const COPY_HINT: &str = "Copy the script above, paste it into a Snowflake worksheet, and run it. \
     Press Ctrl+S to save it as a .sql file.";

/// What the last submit produced. Replaced wholesale on every submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Rejected(Vec<String>),
    Generated(GreetingScript),
}

#[derive(Debug, Clone)]
pub struct App {
    pub form: AttendeeForm,
    pub outcome: Outcome,
    pub show_help: bool,
    pub show_rules: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub error: Option<String>,
    pub script_scroll: u16,
    pub script_path: PathBuf,
    pub overwrite: bool,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: AttendeeForm::new(),
            outcome: Outcome::Idle,
            show_help: false,
            show_rules: config.tui.show_rules,
            should_quit: false,
            status: None,
            error: None,
            script_scroll: 0,
            script_path: config.script_path(),
            overwrite: config.overwrite,
            actions: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn apply_script(&mut self, script: GreetingScript) {
        self.script_scroll = 0;
        self.status = Some(COPY_HINT.to_string());
        self.outcome = Outcome::Generated(script);
    }

    pub fn apply_failure(&mut self, failure: ValidationFailure) {
        self.script_scroll = 0;
        self.status = None;
        self.outcome = Outcome::Rejected(failure.messages());
    }

    pub fn script(&self) -> Option<&GreetingScript> {
        match &self.outcome {
            Outcome::Generated(script) => Some(script),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('s') => {
                    if self.script().is_some() {
                        self.enqueue(Action::SaveScript);
                    } else {
                        self.set_error("nothing to save yet; generate the script first");
                    }
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::PageDown => self.scroll_script(SCROLL_PAGE as i32),
            KeyCode::PageUp => self.scroll_script(-(SCROLL_PAGE as i32)),
            KeyCode::Enter => {
                if self.form.is_generate_focus() {
                    self.clear_error();
                    self.enqueue(Action::Submit(self.form.to_input()));
                } else if self.form.is_quit_focus() {
                    self.should_quit = true;
                } else {
                    self.form.focus_next();
                }
            }
            _ => {
                if let Some(target) = self.form.active_field_mut() {
                    apply_text_input(target, key);
                }
            }
        }
    }

    fn scroll_script(&mut self, delta: i32) {
        let Some(script) = self.script() else {
            return;
        };
        let max = script.sql.lines().count().saturating_sub(1) as i32;
        let next = (self.script_scroll as i32 + delta).clamp(0, max);
        self.script_scroll = next as u16;
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                target.push(ch);
            }
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}

/// Field text is held exactly as typed; nothing is trimmed here.
#[derive(Debug, Clone, Default)]
pub struct AttendeeForm {
    pub(crate) focus: usize,
    pub email: String,
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl AttendeeForm {
    const FIELD_COUNT: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        self.focus = (self.focus + 1) % total;
    }

    pub fn focus_prev(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        if self.focus == 0 {
            self.focus = total - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn is_generate_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT
    }

    pub fn is_quit_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT + 1
    }

    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.email),
            1 => Some(&mut self.first),
            2 => Some(&mut self.middle),
            3 => Some(&mut self.last),
            _ => None,
        }
    }

    pub fn to_input(&self) -> SubmissionInput {
        SubmissionInput::new(
            self.email.as_str(),
            self.first.as_str(),
            self.middle.as_str(),
            self.last.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AttendeeForm, Outcome};
    use crate::actions::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use greeter_config::AppConfig;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn fill(app: &mut App, email: &str, first: &str, middle: &str, last: &str) {
        for value in [email, first, middle, last] {
            type_text(app, value);
            press(app, KeyCode::Tab);
        }
    }

    #[test]
    fn focus_cycles_through_fields_and_buttons() {
        let mut form = AttendeeForm::new();
        for _ in 0..4 {
            form.focus_next();
        }
        assert!(form.is_generate_focus());
        form.focus_next();
        assert!(form.is_quit_focus());
        form.focus_next();
        assert_eq!(form.focus, 0);
        form.focus_prev();
        assert!(form.is_quit_focus());
    }

    #[test]
    fn typing_keeps_trailing_whitespace() {
        let mut app = App::new(&AppConfig::default());
        fill(&mut app, "a@b.com", "K ", "", "Smith");
        assert_eq!(app.form.first, "K ");
        assert!(app.form.is_generate_focus());

        press(&mut app, KeyCode::Enter);
        match app.next_action() {
            Some(Action::Submit(input)) => {
                assert_eq!(input.first, "K ");
                assert_eq!(input.last, "Smith");
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(app.next_action().is_none());
    }

    #[test]
    fn enter_on_field_moves_focus() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.focus, 1);
        assert!(app.next_action().is_none());
    }

    #[test]
    fn ctrl_shortcuts_edit_active_field() {
        let mut app = App::new(&AppConfig::default());
        type_text(&mut app, "ada lovelace");
        ctrl(&mut app, 'w');
        assert_eq!(app.form.email, "ada ");
        ctrl(&mut app, 'u');
        assert_eq!(app.form.email, "");
    }

    #[test]
    fn save_requires_generated_script() {
        let mut app = App::new(&AppConfig::default());
        ctrl(&mut app, 's');
        assert!(app.next_action().is_none());
        assert!(app.error.is_some());
        assert_eq!(app.outcome, Outcome::Idle);
    }

    #[test]
    fn escape_and_quit_button_exit() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        type_text(&mut app, "x");
        assert_eq!(app.form.email, "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
