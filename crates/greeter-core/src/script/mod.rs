use serde::Serialize;

use crate::domain::{AttendeeSubmission, SubmissionInput};
use crate::rules::{validate, ValidationFailure};

/// Everything above the greeting call: role, API integration, `util_db`,
/// the grader and greeting external functions, and the attendee reminders.
const SETUP_SQL: &str = include_str!("workshop_setup.sql");

pub const SCRIPT_FILE_NAME: &str = "workshop_greeting.sql";
pub const SCRIPT_MIME_TYPE: &str = "text/sql";

/// Attendee-facing rules shown next to the form.
pub const RULES: [&str; 3] = [
    "Format your name correctly (no all-lowercase / no all-uppercase).",
    "No middle name? Use an empty string: ''.",
    "Email must match what they used to register.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingScript {
    pub greeting_call: String,
    pub sql: String,
}

impl GreetingScript {
    pub fn file_name(&self) -> &'static str {
        SCRIPT_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        SCRIPT_MIME_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.sql.as_bytes()
    }
}

/// Wraps a value in single quotes, doubling any quote inside it.
pub fn sql_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn greeting_call(submission: &AttendeeSubmission) -> String {
    let middle = submission.middle().map(|name| name.raw()).unwrap_or_default();
    format!(
        "select util_db.public.greeting({}, {}, {}, {});",
        sql_string_literal(submission.email()),
        sql_string_literal(submission.first().raw()),
        sql_string_literal(middle),
        sql_string_literal(submission.last().raw()),
    )
}

pub fn render_script(submission: &AttendeeSubmission) -> GreetingScript {
    let greeting_call = greeting_call(submission);
    let sql = format!("{SETUP_SQL}{greeting_call}\n");
    GreetingScript { greeting_call, sql }
}

/// Runs one submission through validation and, if it passes, renders the
/// script. Nothing is retained between calls.
pub fn handle_submit(input: &SubmissionInput) -> Result<GreetingScript, ValidationFailure> {
    let submission = validate(input)?;
    Ok(render_script(&submission))
}
