use serde::Serialize;
use std::fmt;

/// Field identifiers for both screens. Declaration order is the order
/// validation errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup seam between form records and the validation schema. Implemented
/// by the typed records so rules address fields without reflection.
pub trait FormRecord {
    fn value(&self, field: FieldName) -> Option<&str>;
}

/// One sign-up submission attempt. Built from the form controller's current
/// values, sent as the user-creation request body, discarded after handling.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpData {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormRecord for SignUpData {
    fn value(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
        }
    }
}

/// One sign-in submission attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

impl FormRecord for SignInData {
    fn value(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => None,
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
        }
    }
}

/// Ordered field -> message collection produced by a failed validation pass.
/// Insertion order follows rule-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(FieldName, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    /// First message recorded for a field, mirroring how per-field
    /// annotations show a single message at a time.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_preserve_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.push(FieldName::Email, "Enter a valid email");
        errors.push(FieldName::Password, "Password too short");

        let fields: Vec<FieldName> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FieldName::Email, FieldName::Password]);
    }

    #[test]
    fn test_field_errors_get_returns_first_message() {
        let mut errors = FieldErrors::new();
        errors.push(FieldName::Email, "first");
        errors.push(FieldName::Email, "second");

        assert_eq!(errors.get(FieldName::Email), Some("first"));
        assert_eq!(errors.get(FieldName::Name), None);
    }

    #[test]
    fn test_sign_in_record_has_no_name_field() {
        let data = SignInData {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(data.value(FieldName::Name), None);
        assert_eq!(data.value(FieldName::Email), Some("a@b.com"));
    }
}
