//! Registration field rules
//!
//! Every field is checked on each pass; within a field the first failing
//! rule supplies the message.

use super::field::{Field, FormErrors, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_TOO_SHORT: &str = "*Name must be at least 5 characters long";
pub const NAME_INVALID_CHARS: &str = "*Name should contain only letters and spaces";
pub const EMAIL_EMPTY: &str = "*Email must be filled out";
pub const EMAIL_INVALID: &str = "*Please enter a valid email address";
pub const PHONE_EMPTY: &str = "*Phone number must be filled out";
pub const PHONE_INVALID: &str = "*Phone number must be exactly 10 digits";
pub const PASSWORD_TOO_SHORT: &str = "*Password must be at least 6 characters long";
pub const CONFIRM_MISMATCH: &str = "*Confirm Password must match Password";

const NAME_MIN_LEN: usize = 5;
const PASSWORD_MIN_LEN: usize = 6;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
// ASCII digits only; `\d` would also accept other Unicode decimal digits
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

fn check_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.chars().count() < NAME_MIN_LEN {
        Some(NAME_TOO_SHORT)
    } else if !NAME_PATTERN.is_match(trimmed) {
        Some(NAME_INVALID_CHARS)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(EMAIL_EMPTY)
    } else if !EMAIL_PATTERN.is_match(trimmed) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(PHONE_EMPTY)
    } else if !PHONE_PATTERN.is_match(trimmed) {
        Some(PHONE_INVALID)
    } else {
        None
    }
}

fn check_password(value: &str) -> Option<&'static str> {
    // untrimmed: surrounding spaces count toward the length
    if value.chars().count() < PASSWORD_MIN_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

fn check_confirm(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm != password {
        Some(CONFIRM_MISMATCH)
    } else {
        None
    }
}

/// Message for the first rule the field fails, if any
pub fn check_field(values: &FormValues, field: Field) -> Option<&'static str> {
    match field {
        Field::Name => check_name(&values.name),
        Field::Email => check_email(&values.email),
        Field::Phone => check_phone(&values.phone),
        Field::Password => check_password(&values.password),
        Field::ConfirmPassword => check_confirm(&values.password, &values.confirm_password),
    }
}

/// Compute a fresh error set for the given values
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in Field::ALL {
        if let Some(message) = check_field(values, field) {
            errors.set(field, message);
        }
    }
    errors
}
