use crate::domain::form::{FieldErrors, FieldName};
use tracing::trace;

/// Typed handle to one on-screen input. Handles are owned by the controller
/// and addressed by `FieldName`; there is no global registry.
#[derive(Debug, Clone)]
pub struct FieldHandle {
    name: FieldName,
    placeholder: &'static str,
    secure: bool,
    value: String,
    error: Option<String>,
}

impl FieldHandle {
    pub fn new(name: FieldName, placeholder: &'static str) -> Self {
        Self {
            name,
            placeholder,
            secure: false,
            value: String::new(),
            error: None,
        }
    }

    /// Marks the input as masked (password entry).
    pub fn secure(name: FieldName, placeholder: &'static str) -> Self {
        Self {
            secure: true,
            ..Self::new(name, placeholder)
        }
    }

    pub fn name(&self) -> FieldName {
        self.name
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Holds one screen's field values, error annotations and focus. Fields are
/// kept in declaration order, which is also the return-key traversal order.
#[derive(Debug)]
pub struct FormController {
    fields: Vec<FieldHandle>,
    focus: usize,
}

impl FormController {
    pub fn new(fields: Vec<FieldHandle>) -> Self {
        assert!(!fields.is_empty(), "a form needs at least one field");
        Self { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[FieldHandle] {
        &self.fields
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.handle(field).map(FieldHandle::value).unwrap_or("")
    }

    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        if let Some(handle) = self.handle_mut(field) {
            handle.value = value.into();
        }
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.handle(field).and_then(FieldHandle::error)
    }

    /// Clears every per-field annotation. Runs at the start of each submit
    /// attempt so stale errors never coexist with a new set.
    pub fn reset_errors(&mut self) {
        trace!("Resetting field error annotations");
        for handle in &mut self.fields {
            handle.error = None;
        }
    }

    /// Annotates the affected fields. The first message wins when a field
    /// violated more than one rule.
    pub fn set_errors(&mut self, errors: &FieldErrors) {
        for handle in &mut self.fields {
            if handle.error.is_none() {
                handle.error = errors.get(handle.name).map(str::to_string);
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|h| h.error.is_some())
    }

    pub fn focused(&self) -> FieldName {
        self.fields[self.focus].name
    }

    pub fn focus(&mut self, field: FieldName) {
        if let Some(idx) = self.fields.iter().position(|h| h.name == field) {
            self.focus = idx;
        }
    }

    /// Return-key chaining: moves focus to the next field and returns it, or
    /// `None` on the last field, where the caller submits the form instead.
    pub fn focus_next(&mut self) -> Option<FieldName> {
        if self.focus + 1 < self.fields.len() {
            self.focus += 1;
            Some(self.fields[self.focus].name)
        } else {
            None
        }
    }

    fn handle(&self, field: FieldName) -> Option<&FieldHandle> {
        self.fields.iter().find(|h| h.name == field)
    }

    fn handle_mut(&mut self, field: FieldName) -> Option<&mut FieldHandle> {
        self.fields.iter_mut().find(|h| h.name == field)
    }
}
