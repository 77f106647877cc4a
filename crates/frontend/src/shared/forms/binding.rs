use super::resolver::ResolvedField;

/// Attributes for the item's `<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBinding {
    pub html_for: String,
    pub error: bool,
}

impl LabelBinding {
    pub fn of(field: &ResolvedField) -> Self {
        Self {
            html_for: field.form_item_id.clone(),
            error: field.invalid(),
        }
    }
}

/// Attributes for the control element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBinding {
    pub id: String,
    /// Description id, plus the message id once an error is present
    pub describedby: String,
    pub invalid: bool,
}

impl ControlBinding {
    pub fn of(field: &ResolvedField) -> Self {
        let describedby = if field.invalid() {
            format!("{} {}", field.form_description_id, field.form_message_id)
        } else {
            field.form_description_id.clone()
        };
        Self {
            id: field.form_item_id.clone(),
            describedby,
            invalid: field.invalid(),
        }
    }
}

/// Attributes for the description paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionBinding {
    pub id: String,
}

impl DescriptionBinding {
    pub fn of(field: &ResolvedField) -> Self {
        Self {
            id: field.form_description_id.clone(),
        }
    }
}

/// Content of the message node, when there is anything to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBinding {
    pub id: String,
    pub body: String,
}

impl MessageBinding {
    /// Error message wins over the static fallback; an empty body means
    /// no node at all.
    pub fn compose(field: &ResolvedField, fallback: Option<&str>) -> Option<Self> {
        let body = match &field.error {
            Some(error) => error.message.clone(),
            None => fallback.unwrap_or_default().to_string(),
        };
        if body.is_empty() {
            return None;
        }
        Some(Self {
            id: field.form_message_id.clone(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::resolver::resolve;
    use crate::shared::forms::scope::{FieldScope, ItemScope};
    use crate::shared::forms::state::{FieldError, FieldState, FormSnapshot};

    fn resolved_with(error: Option<FieldError>) -> ResolvedField {
        let field = FieldScope::new("email");
        let item = ItemScope::new("fi-0");
        let snapshot = FormSnapshot::new().with_field(
            "email",
            FieldState {
                error,
                is_dirty: false,
                is_touched: false,
            },
        );
        resolve(&field, &item, &snapshot).unwrap()
    }

    #[test]
    fn describedby_is_description_only_while_valid() {
        let control = ControlBinding::of(&resolved_with(None));
        assert_eq!(control.id, "fi-0-form-item");
        assert_eq!(control.describedby, "fi-0-form-item-description");
        assert!(!control.invalid);
    }

    #[test]
    fn describedby_appends_message_id_on_error() {
        let control = ControlBinding::of(&resolved_with(Some(FieldError::required())));
        assert_eq!(
            control.describedby,
            "fi-0-form-item-description fi-0-form-item-message"
        );
        assert!(control.invalid);
    }

    #[test]
    fn label_points_at_the_control() {
        let label = LabelBinding::of(&resolved_with(None));
        assert_eq!(label.html_for, "fi-0-form-item");
        assert!(!label.error);
        assert!(LabelBinding::of(&resolved_with(Some(FieldError::required()))).error);
    }

    #[test]
    fn message_prefers_the_error() {
        let field = resolved_with(Some(FieldError::required()));
        let message = MessageBinding::compose(&field, Some("Helpful hint")).unwrap();
        assert_eq!(message.body, "This field is required");
        assert_eq!(message.id, "fi-0-form-item-message");
    }

    #[test]
    fn message_falls_back_to_children() {
        let field = resolved_with(None);
        let message = MessageBinding::compose(&field, Some("Helpful hint")).unwrap();
        assert_eq!(message.body, "Helpful hint");
    }

    #[test]
    fn message_renders_nothing_without_content() {
        let field = resolved_with(None);
        assert_eq!(MessageBinding::compose(&field, None), None);
        assert_eq!(MessageBinding::compose(&field, Some("")), None);
    }

    #[test]
    fn empty_error_message_renders_nothing_but_stays_invalid() {
        let field = resolved_with(Some(FieldError::new("REQUIRED", "")));
        assert_eq!(MessageBinding::compose(&field, Some("Helpful hint")), None);
        assert!(ControlBinding::of(&field).invalid);
    }
}
