use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::AppError;

/// Fixed body returned by `DELETE /delete/{id}`.
pub const USER_DELETED: &str = "Success! User deleted.";
/// Fixed body returned by `PUT /update/{id}`.
pub const USER_UPDATED: &str = "Success! User updated.";

/// Store-assigned identifier of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UserId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|_| AppError::InvalidId(s.to_string()))
    }
}

/// A persisted user as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default, serialize_with = "age_number", skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
}

/// Body of `POST /new`.
///
/// Required fields are optional here so that a missing field surfaces as a
/// schema violation rather than a body-parsing failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub age: Option<f64>,
}

/// Body of `PUT /update/{id}`.
///
/// Each field distinguishes "absent" (`None`, left untouched) from an explicit
/// `null` (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<f64>>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.age.is_none()
    }
}

// Whole ages go out as JSON integers (`30`, not `30.0`)
fn age_number<S: Serializer>(age: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *age {
        Some(a) if a.fract() == 0.0 && a.abs() < i64::MAX as f64 => serializer.serialize_i64(a as i64),
        Some(a) => serializer.serialize_f64(a),
        None => serializer.serialize_none(),
    }
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Whether a delete or update found a record with the given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NotMatched,
}

impl Outcome {
    pub fn is_matched(self) -> bool {
        matches!(self, Outcome::Matched)
    }
}

impl From<u64> for Outcome {
    fn from(rows_affected: u64) -> Self {
        if rows_affected > 0 {
            Outcome::Matched
        } else {
            Outcome::NotMatched
        }
    }
}
