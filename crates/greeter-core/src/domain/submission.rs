use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::name::NameField;
use crate::domain::text::normalize_space;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    FirstName,
    MiddleName,
    LastName,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::FirstName => "First name",
            Field::MiddleName => "Middle name",
            Field::LastName => "Last name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four fields of one form submission, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmissionInput {
    pub email: String,
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl SubmissionInput {
    pub fn new(
        email: impl Into<String>,
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }
}

/// A submission that passed every validation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeSubmission {
    email: String,
    first: NameField,
    middle: Option<NameField>,
    last: NameField,
}

impl AttendeeSubmission {
    pub(crate) fn from_parts(input: &SubmissionInput) -> Self {
        Self {
            email: normalize_space(&input.email),
            first: NameField::new(&input.first),
            middle: (!input.middle.is_empty()).then(|| NameField::new(&input.middle)),
            last: NameField::new(&input.last),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first(&self) -> &NameField {
        &self.first
    }

    pub fn middle(&self) -> Option<&NameField> {
        self.middle.as_ref()
    }

    pub fn last(&self) -> &NameField {
        &self.last
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = (Field, &NameField)> {
        [
            Some((Field::FirstName, &self.first)),
            self.middle.as_ref().map(|middle| (Field::MiddleName, middle)),
            Some((Field::LastName, &self.last)),
        ]
        .into_iter()
        .flatten()
    }
}
