//! Form domain layer
//!
//! Type-safe registration form handling: field values, per-field errors,
//! password reveal flags and the submission workflow.

mod field;
mod form_state;
pub mod validation;

pub use field::{display_value, Field, PasswordVisibility};
pub use form_state::{Form, RegistrationForm, SubmitOutcome};
