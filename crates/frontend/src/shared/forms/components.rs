use leptos::prelude::*;

use super::binding::{ControlBinding, DescriptionBinding, LabelBinding, MessageBinding};
use super::manager::FormManager;
use super::resolver::{resolve_scoped, FormBindingError, ResolvedField};
use super::scope::{FieldScope, ItemScope};

/// Ambient handles of one field item, captured when a binding component
/// mounts.
#[derive(Clone)]
pub struct FieldHandle {
    field: FieldScope,
    item: ItemScope,
    manager: FormManager,
}

impl FieldHandle {
    /// Project the field against the manager's current snapshot.
    /// Reactive when called inside a tracking closure.
    pub fn resolved(&self) -> ResolvedField {
        match resolve_scoped(Some(&self.field), Some(&self.item), &self.manager.snapshot()) {
            Ok(resolved) => resolved,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Read the ambient scopes of the nearest field item.
///
/// Panics when called outside `Form`/`FormField`/`FormItem` — that is a
/// wiring mistake, not a runtime condition.
pub fn use_form_field() -> FieldHandle {
    match try_use_form_field() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible variant of [`use_form_field`].
pub fn try_use_form_field() -> Result<FieldHandle, FormBindingError> {
    let field = use_context::<FieldScope>().ok_or(FormBindingError::MissingFieldScope)?;
    if field.name().is_empty() {
        return Err(FormBindingError::MissingFieldScope);
    }
    let item = use_context::<ItemScope>().ok_or(FormBindingError::MissingItemScope)?;
    let manager = use_context::<FormManager>().ok_or(FormBindingError::MissingFormScope)?;
    Ok(FieldHandle {
        field,
        item,
        manager,
    })
}

/// Form root. Provides the manager to the subtree and gates `on_submit`
/// behind a full validation pass.
#[component]
pub fn Form(
    manager: FormManager,
    /// Runs only when validation passes
    #[prop(optional)]
    on_submit: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    provide_context(manager);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <form
            class=move || format!("form {}", additional_class())
            on:submit=move |ev| {
                ev.prevent_default();
                if manager.validate_all() {
                    if let Some(handler) = on_submit {
                        handler.run(());
                    }
                }
            }
        >
            {children()}
        </form>
    }
}

/// Declares the field identity for everything beneath it.
#[component]
pub fn FormField(
    /// Registered field name
    #[prop(into)]
    name: String,
    children: Children,
) -> impl IntoView {
    provide_context(FieldScope::new(name));
    children()
}

/// One rendered item of a field. Owns the instance id; the component
/// body runs once per mount, so the id is stable across re-renders.
#[component]
pub fn FormItem(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    provide_context(ItemScope::allocate());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("form__item {}", additional_class())>
            {children()}
        </div>
    }
}

/// Label wired to the item's control, flagged while the field errors.
#[component]
pub fn FormLabel(children: Children) -> impl IntoView {
    let handle = use_form_field();
    let html_for = {
        let handle = handle.clone();
        move || LabelBinding::of(&handle.resolved()).html_for
    };
    let data_error = move || {
        if LabelBinding::of(&handle.resolved()).error {
            "true"
        } else {
            "false"
        }
    };

    view! {
        <label class="form__label" for=html_for data-error=data_error>
            {children()}
        </label>
    }
}

/// Hands the control its binding. Renders no element of its own: the ui
/// primitives beneath pick the binding up from context and apply the
/// id / aria-describedby / aria-invalid attributes themselves.
#[component]
pub fn FormControl(children: Children) -> impl IntoView {
    let handle = use_form_field();
    let binding = Signal::derive(move || ControlBinding::of(&handle.resolved()));
    provide_context(binding);
    children()
}

/// Help text below the control, referenced by aria-describedby.
#[component]
pub fn FormDescription(children: Children) -> impl IntoView {
    let handle = use_form_field();
    let id = move || DescriptionBinding::of(&handle.resolved()).id;

    view! {
        <p class="form__description" id=id>
            {children()}
        </p>
    }
}

/// Validation message. Shows the field error when there is one, the
/// static fallback otherwise, and nothing when both are empty.
#[component]
pub fn FormMessage(
    /// Text shown while the field has no error
    #[prop(optional, into)]
    fallback: MaybeProp<String>,
) -> impl IntoView {
    let handle = use_form_field();

    move || {
        let text = fallback.get();
        MessageBinding::compose(&handle.resolved(), text.as_deref()).map(|message| {
            view! {
                <p class="form__message" id=message.id>
                    {message.body}
                </p>
            }
        })
    }
}
