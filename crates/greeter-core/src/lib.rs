pub mod domain;
pub mod error;
pub mod rules;
pub mod script;

pub use domain::*;
pub use error::{ValidationError, SINGLE_CHARACTER_MESSAGE};
pub use rules::*;
pub use script::{
    greeting_call, handle_submit, render_script, sql_string_literal, GreetingScript, RULES,
    SCRIPT_FILE_NAME, SCRIPT_MIME_TYPE,
};
