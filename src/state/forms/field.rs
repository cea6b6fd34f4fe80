//! Registration form field identifiers and per-field value records

/// One named input of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display and validation order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable key used in logs and confirmation output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Password-type fields support the reveal toggle and render masked
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Look up a field by its position in [`Field::ALL`]
    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Password => 3,
            Self::ConfirmPassword => 4,
        }
    }
}

/// Current value of every field (FormState)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Overwrite a field's value
    pub fn set(&mut self, field: Field, value: String) {
        *self.get_mut(field) = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, field: Field, c: char) {
        self.get_mut(field).push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self, field: Field) {
        self.get_mut(field).pop();
    }
}

/// Current error message of every field (ErrorState); empty means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, message: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = message.to_string();
    }

    /// True when no field carries an error
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that currently carry an error, in form order
    pub fn failing_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| !self.get(*f).is_empty())
            .collect()
    }
}

/// Reveal flags for the password-type fields (VisibilityState)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    pub password: bool,
    pub confirm_password: bool,
}

impl PasswordVisibility {
    /// Whether the field's value is shown in clear text.
    /// Non-secret fields are always visible.
    pub fn is_revealed(&self, field: Field) -> bool {
        match field {
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
            _ => true,
        }
    }

    /// Flip the reveal flag; returns false for non-secret fields
    pub fn toggle(&mut self, field: Field) -> bool {
        match field {
            Field::Password => self.password = !self.password,
            Field::ConfirmPassword => self.confirm_password = !self.confirm_password,
            _ => return false,
        }
        true
    }
}

/// Text shown for a field value, masked when the field is secret and hidden
pub fn display_value(value: &str, field: Field, visibility: &PasswordVisibility) -> String {
    if visibility.is_revealed(field) {
        value.to_string()
    } else {
        "•".repeat(value.chars().count())
    }
}
