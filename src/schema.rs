//! Constraints of the User record.
//!
//! `username` and `email` are required strings, `age` is optional but may not
//! be below [`MIN_AGE`]. The same rules apply to the fields an update touches.

use std::fmt;

use crate::types::{NewUser, UserPatch};

pub const MIN_AGE: f64 = 18.0;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self { field, message: format!("Path `{}` is required.", field) }
    }

    fn below_min_age(age: f64) -> Self {
        Self {
            field: "age",
            message: format!("Path `age` ({}) is less than minimum allowed value ({}).", age, MIN_AGE),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every constraint a candidate record violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("User validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// A record that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub age: Option<f64>,
}

pub fn validate_new(new: NewUser) -> Result<UserDraft, ValidationFailure> {
    let mut errors = Vec::new();

    let username = required("username", new.username, &mut errors);
    let email = required("email", new.email, &mut errors);
    if let Some(age) = new.age {
        check_age(age, &mut errors);
    }

    match (username, email) {
        (Some(username), Some(email)) if errors.is_empty() => Ok(UserDraft { username, email, age: new.age }),
        _ => Err(ValidationFailure { errors }),
    }
}

/// Checks only the fields present in the patch. Clearing `age` is allowed,
/// clearing a required field is not.
pub fn validate_patch(patch: &UserPatch) -> Result<(), ValidationFailure> {
    let mut errors = Vec::new();

    if let Some(username) = &patch.username {
        required("username", username.clone(), &mut errors);
    }
    if let Some(email) = &patch.email {
        required("email", email.clone(), &mut errors);
    }
    if let Some(Some(age)) = patch.age {
        check_age(age, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { errors })
    }
}

fn required(field: &'static str, value: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(FieldError::required(field));
            None
        }
    }
}

fn check_age(age: f64, errors: &mut Vec<FieldError>) {
    if age < MIN_AGE {
        errors.push(FieldError::below_min_age(age));
    }
}
