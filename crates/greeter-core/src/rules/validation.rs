use serde::Serialize;
use std::fmt;

use crate::domain::{
    is_allowed_single_initial, is_single_lowercase, is_valid_email, looks_like_bad_name_case,
    AttendeeSubmission, Field, SubmissionInput,
};
use crate::error::ValidationError;

/// The stage at which a submission was halted. Stages run in this order and
/// the first one that reports anything stops the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    Presence,
    Casing,
    SingleCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub category: FailureCategory,
    pub errors: Vec<ValidationError>,
}

impl ValidationFailure {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

impl std::error::Error for ValidationFailure {}

pub fn validate(input: &SubmissionInput) -> Result<AttendeeSubmission, ValidationFailure> {
    let submission = AttendeeSubmission::from_parts(input);

    halt_on(FailureCategory::Presence, presence_errors(&submission))?;
    halt_on(FailureCategory::Casing, casing_errors(&submission))?;
    halt_on(
        FailureCategory::SingleCharacter,
        single_character_errors(&submission),
    )?;

    Ok(submission)
}

fn halt_on(category: FailureCategory, errors: Vec<ValidationError>) -> Result<(), ValidationFailure> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { category, errors })
    }
}

fn presence_errors(submission: &AttendeeSubmission) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if submission.email().is_empty() {
        errors.push(ValidationError::MissingField(Field::Email));
    } else if !is_valid_email(submission.email()) {
        errors.push(ValidationError::InvalidEmailShape);
    }
    if submission.first().is_empty() {
        errors.push(ValidationError::MissingField(Field::FirstName));
    }
    if submission.last().is_empty() {
        errors.push(ValidationError::MissingField(Field::LastName));
    }
    errors
}

fn casing_errors(submission: &AttendeeSubmission) -> Vec<ValidationError> {
    // A lone lowercase letter is reported as a casing problem, not as a
    // single character. These go first, ahead of the multi-letter rule.
    let single_lowercase = submission
        .names()
        .filter(|(_, name)| is_single_lowercase(name.normalized()))
        .map(|(field, _)| ValidationError::BadNameCasing(field));
    let uniform_case = submission
        .names()
        .filter(|(_, name)| looks_like_bad_name_case(name.normalized()))
        .map(|(field, _)| ValidationError::BadNameCasing(field));
    single_lowercase.chain(uniform_case).collect()
}

fn single_character_errors(submission: &AttendeeSubmission) -> Vec<ValidationError> {
    let triggered = submission.names().any(|(_, name)| {
        name.is_single_character()
            && !is_single_lowercase(name.normalized())
            && !is_allowed_single_initial(name.raw())
    });
    // Shown once no matter how many fields tripped it.
    if triggered {
        vec![ValidationError::DisallowedSingleCharacter]
    } else {
        Vec::new()
    }
}
