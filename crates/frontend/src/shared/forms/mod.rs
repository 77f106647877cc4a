//! Form field binding layer.
//!
//! Splits a form field into two identities: the logical field name
//! ([`scope::FieldScope`]) and the rendered item instance
//! ([`scope::ItemScope`]), then projects them together with the form's
//! current [`state::FormSnapshot`] into one [`resolver::ResolvedField`]
//! record. The binding types in [`binding`] turn that record into the
//! label / control / description / message attribute sets, so every
//! control gets its `id`, `aria-describedby` and `aria-invalid` wiring
//! from a single pure resolution step.

pub mod binding;
pub mod components;
pub mod manager;
pub mod resolver;
pub mod scope;
pub mod state;

pub use binding::{ControlBinding, DescriptionBinding, LabelBinding, MessageBinding};
pub use components::{
    try_use_form_field, use_form_field, FieldHandle, Form, FormControl, FormDescription,
    FormField, FormItem, FormLabel, FormMessage,
};
pub use manager::{FormManager, Rule};
pub use resolver::{resolve, resolve_scoped, FormBindingError, ResolvedField};
pub use scope::{FieldScope, ItemScope};
pub use state::{FieldError, FieldState, FormSnapshot};
