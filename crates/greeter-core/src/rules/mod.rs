pub mod validation;

pub use validation::{validate, FailureCategory, ValidationFailure};
