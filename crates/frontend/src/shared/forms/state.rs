use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Validation failure attached to a field. Flows through the snapshot
/// as data; never raised as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn required() -> Self {
        Self::new("REQUIRED", "This field is required")
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new("INVALID", message)
    }
}

/// Validation state of one field. The default value is the normal
/// "valid, untouched" state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldState {
    pub error: Option<FieldError>,
    pub is_dirty: bool,
    pub is_touched: bool,
}

impl FieldState {
    pub fn invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Committed validation state of a whole form at one instant.
///
/// Handed to the resolver as an explicit argument; looking up a name
/// that was never registered yields the default valid state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    fields: HashMap<String, FieldState>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, state: FieldState) {
        self.fields.insert(name.into(), state);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_field(mut self, name: impl Into<String>, state: FieldState) -> Self {
        self.set(name, state);
        self
    }

    pub fn field_state(&self, name: &str) -> FieldState {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_valid() {
        let state = FieldState::default();
        assert!(!state.invalid());
        assert!(!state.is_dirty);
        assert!(!state.is_touched);
    }

    #[test]
    fn unknown_field_resolves_to_default() {
        let snapshot = FormSnapshot::new();
        assert_eq!(snapshot.field_state("quantity"), FieldState::default());
    }

    #[test]
    fn stored_state_is_returned() {
        let snapshot = FormSnapshot::new().with_field(
            "quantity",
            FieldState {
                error: Some(FieldError::required()),
                is_dirty: true,
                is_touched: false,
            },
        );
        let state = snapshot.field_state("quantity");
        assert!(state.invalid());
        assert!(state.is_dirty);
        assert_eq!(state.error.map(|e| e.code), Some("REQUIRED".to_string()));
    }
}
