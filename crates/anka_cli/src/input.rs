//! Caller-boundary validation of raw reading inputs.
//!
//! The engine itself is total over well-formed inputs; everything that can
//! actually go wrong (date strings, gender tokens, empty names, future
//! dates) is rejected here before the engine is invoked.

use std::error::Error;
use std::fmt::{Display, Formatter};

use anka_base::{BirthDate, Gender};
use chrono::{Datelike, NaiveDate};

/// Errors from reading input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// Name was empty or whitespace only.
    EmptyName,
    /// Date string did not parse as a YYYY-MM-DD calendar date.
    MalformedDate(String),
    /// Date of birth lies after the reference "today".
    FutureDate,
    /// Gender token was not "male" or "female".
    UnknownGender(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::MalformedDate(raw) => {
                write!(f, "Invalid date of birth '{raw}': expected YYYY-MM-DD")
            }
            Self::FutureDate => write!(f, "Date of birth cannot be in the future"),
            Self::UnknownGender(_) => write!(f, "Gender must be either male or female"),
        }
    }
}

impl Error for InputError {}

/// A validated reading request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRequest {
    pub name: String,
    pub birth: BirthDate,
    pub gender: Gender,
}

/// Validate raw inputs against a reference date (usually today).
pub fn validate_input(
    name: &str,
    date_of_birth: &str,
    gender: &str,
    today: NaiveDate,
) -> Result<ReadingRequest, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }

    let date = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
        .map_err(|_| InputError::MalformedDate(date_of_birth.to_string()))?;
    if date > today {
        return Err(InputError::FutureDate);
    }

    let gender = match gender.to_lowercase().as_str() {
        "male" => Gender::Male,
        "female" => Gender::Female,
        other => return Err(InputError::UnknownGender(other.to_string())),
    };

    Ok(ReadingRequest {
        name: name.to_string(),
        birth: BirthDate::new(date.day() as u8, date.month() as u8, date.year() as u32),
        gender,
    })
}
