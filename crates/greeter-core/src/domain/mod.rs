pub mod email;
pub mod name;
pub mod submission;
pub mod text;

pub use email::is_valid_email;
pub use name::{is_allowed_single_initial, is_single_lowercase, looks_like_bad_name_case, NameField};
pub use submission::{AttendeeSubmission, Field, SubmissionInput};
pub use text::{is_form_whitespace, normalize_space};
