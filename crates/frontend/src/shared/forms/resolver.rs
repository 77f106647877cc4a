use super::scope::{FieldScope, ItemScope};
use super::state::{FieldError, FormSnapshot};

/// Everything the binding components need to know about one field item:
/// its identity, the derived element ids and the current validation
/// state. Produced by [`resolve_scoped`] and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub id: String,
    pub name: String,
    pub form_item_id: String,
    pub form_description_id: String,
    pub form_message_id: String,
    pub error: Option<FieldError>,
    pub is_dirty: bool,
    pub is_touched: bool,
}

impl ResolvedField {
    pub fn invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Misuse of the binding layer. These are programmer errors: a binding
/// component rendered outside the scopes it needs. Never silently
/// defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormBindingError {
    /// No enclosing `FormField`, or its name is empty
    MissingFieldScope,
    /// No enclosing `FormItem`
    MissingItemScope,
    /// No enclosing `Form`
    MissingFormScope,
}

impl FormBindingError {
    pub fn code(&self) -> &'static str {
        match self {
            FormBindingError::MissingFieldScope => "MISSING_FIELD_SCOPE",
            FormBindingError::MissingItemScope => "MISSING_ITEM_SCOPE",
            FormBindingError::MissingFormScope => "MISSING_FORM_SCOPE",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FormBindingError::MissingFieldScope => {
                "form binding components must be used within a <FormField> with a non-empty name"
            }
            FormBindingError::MissingItemScope => {
                "form binding components must be used within a <FormItem>"
            }
            FormBindingError::MissingFormScope => {
                "form binding components must be used within a <Form>"
            }
        }
    }
}

impl std::fmt::Display for FormBindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for FormBindingError {}

/// Project a field against the snapshot with both scopes in hand.
pub fn resolve(
    field: &FieldScope,
    item: &ItemScope,
    snapshot: &FormSnapshot,
) -> Result<ResolvedField, FormBindingError> {
    resolve_scoped(Some(field), Some(item), snapshot)
}

/// Project a field from optional ambient scopes.
///
/// Pure: reads its arguments, allocates nothing shared, and returns the
/// same value for the same inputs. Absence of either scope fails before
/// any state is looked up.
pub fn resolve_scoped(
    field: Option<&FieldScope>,
    item: Option<&ItemScope>,
    snapshot: &FormSnapshot,
) -> Result<ResolvedField, FormBindingError> {
    let field = field.ok_or(FormBindingError::MissingFieldScope)?;
    if field.name().is_empty() {
        return Err(FormBindingError::MissingFieldScope);
    }
    let item = item.ok_or(FormBindingError::MissingItemScope)?;

    let state = snapshot.field_state(field.name());
    Ok(ResolvedField {
        id: item.id().to_string(),
        name: field.name().to_string(),
        form_item_id: item.form_item_id(),
        form_description_id: item.form_description_id(),
        form_message_id: item.form_message_id(),
        error: state.error,
        is_dirty: state.is_dirty,
        is_touched: state.is_touched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::state::FieldState;

    fn scopes() -> (FieldScope, ItemScope) {
        (FieldScope::new("quantity"), ItemScope::new("fi-3"))
    }

    #[test]
    fn name_passes_through_unchanged() {
        let (field, item) = scopes();
        let resolved = resolve(&field, &item, &FormSnapshot::new()).unwrap();
        assert_eq!(resolved.name, "quantity");
        assert_eq!(resolved.id, "fi-3");
    }

    #[test]
    fn derived_ids_follow_the_item_id() {
        let (field, item) = scopes();
        let resolved = resolve(&field, &item, &FormSnapshot::new()).unwrap();
        assert_eq!(resolved.form_item_id, "fi-3-form-item");
        assert_eq!(resolved.form_description_id, "fi-3-form-item-description");
        assert_eq!(resolved.form_message_id, "fi-3-form-item-message");
    }

    #[test]
    fn resolving_twice_is_value_equal() {
        let (field, item) = scopes();
        let snapshot = FormSnapshot::new().with_field(
            "quantity",
            FieldState {
                error: Some(FieldError::required()),
                is_dirty: true,
                is_touched: true,
            },
        );
        let first = resolve(&field, &item, &snapshot).unwrap();
        let second = resolve(&field, &item, &snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_state_is_merged_in() {
        let (field, item) = scopes();
        let snapshot = FormSnapshot::new().with_field(
            "quantity",
            FieldState {
                error: Some(FieldError::invalid("Enter a whole number")),
                is_dirty: true,
                is_touched: false,
            },
        );
        let resolved = resolve(&field, &item, &snapshot).unwrap();
        assert!(resolved.invalid());
        assert!(resolved.is_dirty);
        assert!(!resolved.is_touched);
        assert_eq!(
            resolved.error.map(|e| e.message),
            Some("Enter a whole number".to_string())
        );
    }

    #[test]
    fn unregistered_name_is_the_valid_state() {
        let (field, item) = scopes();
        let snapshot = FormSnapshot::new().with_field("other", FieldState::default());
        let resolved = resolve(&field, &item, &snapshot).unwrap();
        assert!(!resolved.invalid());
        assert!(!resolved.is_dirty);
        assert!(!resolved.is_touched);
    }

    #[test]
    fn missing_field_scope_fails_for_every_input() {
        let item = ItemScope::new("fi-3");
        let empty = FormSnapshot::new();
        let populated =
            FormSnapshot::new().with_field("quantity", FieldState::default());

        for snapshot in [&empty, &populated] {
            for item in [Some(&item), None] {
                assert_eq!(
                    resolve_scoped(None, item, snapshot),
                    Err(FormBindingError::MissingFieldScope)
                );
            }
        }
    }

    #[test]
    fn empty_name_counts_as_missing_field_scope() {
        let field = FieldScope::new("");
        let item = ItemScope::new("fi-3");
        assert_eq!(
            resolve(&field, &item, &FormSnapshot::new()),
            Err(FormBindingError::MissingFieldScope)
        );
    }

    #[test]
    fn missing_item_scope_fails() {
        let field = FieldScope::new("quantity");
        assert_eq!(
            resolve_scoped(Some(&field), None, &FormSnapshot::new()),
            Err(FormBindingError::MissingItemScope)
        );
    }

    #[test]
    fn error_display_carries_the_code() {
        let text = FormBindingError::MissingFieldScope.to_string();
        assert!(text.starts_with("[MISSING_FIELD_SCOPE]"));
    }
}
