use crate::domain::Field;
use thiserror::Error;

pub const SINGLE_CHARACTER_MESSAGE: &str =
    "A single character is not allowed, please input a space after to proceed.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(Field),
    #[error("Email doesn't look valid (expected something like name@company.com).")]
    InvalidEmailShape,
    #[error("{0} cannot be all lowercase or all uppercase.")]
    BadNameCasing(Field),
    #[error("{}", SINGLE_CHARACTER_MESSAGE)]
    DisallowedSingleCharacter,
}
