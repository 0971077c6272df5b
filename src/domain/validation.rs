use crate::domain::form::{FieldErrors, FieldName, FormRecord};
use tracing::{debug, trace};

/// Per-field constraint. `Email` and `MinLength` are format checks: they are
/// exempt on an empty value so that presence is enforced only by `Required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    Email,
    MinLength(usize),
}

/// One (field, predicate, message) entry of a schema.
#[derive(Debug, Clone)]
pub struct Rule {
    pub field: FieldName,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub fn new(field: FieldName, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Declarative rule set for one screen. Rules are evaluated in declaration
/// order and every failure is collected; validation never aborts early.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<Rule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: FieldName, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule::new(field, check, message));
        self
    }

    /// Checks every rule against the record and returns either success or the
    /// full ordered set of violations.
    pub fn validate(&self, record: &impl FormRecord) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for rule in &self.rules {
            let value = record.value(rule.field).unwrap_or("");
            if !check_value(rule.check, value) {
                trace!(field = %rule.field, check = ?rule.check, "Rule violated");
                errors.push(rule.field, rule.message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(violations = errors.len(), "Validation failed");
            Err(errors)
        }
    }
}

fn check_value(check: Check, value: &str) -> bool {
    match check {
        Check::Required => !value.trim().is_empty(),
        // Format checks pass on empty input.
        Check::Email => value.is_empty() || is_email_shaped(value),
        Check::MinLength(min) => value.is_empty() || value.chars().count() >= min,
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a domain
/// containing a dot that is neither leading nor trailing.
fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || value.contains(' ') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'),
        None => false,
    }
}

/// Rule set for the sign-up screen: name and email are mandatory, the
/// password only has to be long enough when provided.
pub fn sign_up_schema() -> Schema {
    Schema::new()
        .rule(FieldName::Name, Check::Required, "Name is required")
        .rule(FieldName::Email, Check::Required, "Email is required")
        .rule(FieldName::Email, Check::Email, "Enter a valid email")
        .rule(
            FieldName::Password,
            Check::MinLength(6),
            "Password must be at least 6 characters",
        )
}

/// Rule set for the sign-in screen.
pub fn sign_in_schema() -> Schema {
    Schema::new()
        .rule(FieldName::Email, Check::Required, "Email is required")
        .rule(FieldName::Email, Check::Email, "Enter a valid email")
        .rule(FieldName::Password, Check::Required, "Enter your password")
}
