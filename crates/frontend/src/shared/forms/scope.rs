use std::sync::atomic::{AtomicU64, Ordering};

/// Logical identity of a field within a form.
///
/// Carries only the registered name. Several items may share one name;
/// no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldScope {
    name: String,
}

impl FieldScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one rendered field item.
///
/// The id is handed out once when the item mounts and stays fixed for
/// its lifetime; derived element ids are recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemScope {
    id: String,
}

impl ItemScope {
    /// Wrap a caller-supplied id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Draw a fresh id from the process-wide counter.
    pub fn allocate() -> Self {
        let n = NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("fi-{n}"))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Element id of the control inside this item.
    pub fn form_item_id(&self) -> String {
        format!("{}-form-item", self.id)
    }

    /// Element id of the description paragraph.
    pub fn form_description_id(&self) -> String {
        format!("{}-form-item-description", self.id)
    }

    /// Element id of the validation message.
    pub fn form_message_id(&self) -> String {
        format!("{}-form-item-message", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_ids_share_the_item_id() {
        let item = ItemScope::new("fi-7");
        assert_eq!(item.form_item_id(), "fi-7-form-item");
        assert_eq!(item.form_description_id(), "fi-7-form-item-description");
        assert_eq!(item.form_message_id(), "fi-7-form-item-message");
    }

    #[test]
    fn derived_ids_are_stable() {
        let item = ItemScope::allocate();
        assert_eq!(item.form_item_id(), item.form_item_id());
        assert_eq!(item.form_description_id(), item.form_description_id());
    }

    #[test]
    fn allocate_is_unique_across_items() {
        let a = ItemScope::allocate();
        let b = ItemScope::allocate();
        let c = ItemScope::allocate();
        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
        assert_ne!(a.id(), c.id());
        assert!(a.id().starts_with("fi-"));
    }
}
