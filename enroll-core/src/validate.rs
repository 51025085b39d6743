use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::Submission;

// Rule patterns compiled once
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\-().\s]{7,}$").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A single failed field with its human-readable message. `field` carries
/// the wire name (`firstName`, not `first_name`) so clients can attach the
/// message to the right input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failed fields of one submission, in field declaration order:
/// firstName, lastName, email, phoneNumber, supervisor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message of the first failing field. This is what the API returns as
    /// its single `error` string.
    pub fn first_message(&self) -> &str {
        self.errors
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a submission, collecting every field error in one pass.
///
/// The same rule set runs on the client (advisory) and the server
/// (authoritative). Empty strings count as absent for the optional fields.
pub fn validate(submission: &Submission) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_name(&mut errors, "firstName", &submission.first_name, "First name");
    check_name(&mut errors, "lastName", &submission.last_name, "Last name");

    if let Some(email) = present(&submission.email) {
        if !EMAIL_PATTERN.is_match(email) {
            errors.push("email", "Email must be a valid email address.");
        }
    }

    if let Some(phone) = present(&submission.phone_number) {
        if !PHONE_PATTERN.is_match(phone) {
            errors.push("phoneNumber", "Phone number must be valid.");
        }
    }

    if submission.supervisor.is_empty() {
        errors.push("supervisor", "Supervisor is required.");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_name(errors: &mut ValidationErrors, field: &'static str, value: &str, label: &str) {
    if value.is_empty() {
        errors.push(field, format!("{label} is required."));
    } else if !NAME_PATTERN.is_match(value) {
        errors.push(field, format!("{label} must contain only letters."));
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
