//! Registration form state and submission workflow

use super::field::{Field, FormErrors, FormValues, PasswordVisibility};
use super::validation::validate;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Values reported back after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Confirmation {
    /// User-facing success text
    pub fn message(&self) -> String {
        format!(
            "Form submitted successfully!\n\nDetails:\nName: {}\nEmail: {}\nPhone: {}",
            self.name, self.email, self.phone
        )
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Confirmation),
    Rejected,
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Registration form: values, errors, reveal flags and focus
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub values: FormValues,
    pub errors: FormErrors,
    pub visibility: PasswordVisibility,
    pub active_field_index: usize,
}

impl RegistrationForm {
    /// Index of the Submit button row
    pub const SUBMIT_ROW: usize = Field::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    /// The input under focus, or None when the Submit row is active
    pub fn active_input(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    /// Returns true if the Submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// Overwrite a field's value; errors are left as they are
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    /// Type a character into the active input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            self.values.push_char(field, c);
        }
    }

    /// Delete the last character of the active input
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_input() {
            self.values.pop_char(field);
        }
    }

    /// Flip the reveal flag of a password-type field.
    /// Returns false (and changes nothing) for any other field.
    pub fn toggle_visibility(&mut self, field: Field) -> bool {
        self.visibility.toggle(field)
    }

    /// Validate all fields and either accept (and reset) or publish errors
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = FormErrors::default();
        let errors = validate(&self.values);

        if !errors.is_empty() {
            tracing::debug!(
                failing = ?errors.failing_fields().iter().map(|f| f.key()).collect::<Vec<_>>(),
                "registration rejected"
            );
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        let values = std::mem::take(&mut self.values);
        self.visibility = PasswordVisibility::default();
        tracing::info!("registration accepted");

        SubmitOutcome::Accepted(Confirmation {
            name: values.name,
            email: values.email,
            phone: values.phone,
        })
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1 // five inputs, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
}
