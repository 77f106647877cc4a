use leptos::prelude::*;

use crate::shared::forms::ControlBinding;

/// Multi-line input. Picks up the ambient control binding the same way
/// `Input` does.
#[component]
pub fn Textarea(
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element; overrides the form binding
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let binding = use_context::<Signal<ControlBinding>>();

    let textarea_id = move || match id.get() {
        Some(explicit) => explicit,
        None => binding.map(|b| b.get().id).unwrap_or_default(),
    };
    let describedby = move || binding.map(|b| b.get().describedby);
    let invalid = move || binding.map(|b| if b.get().invalid { "true" } else { "false" });
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <textarea
            id=textarea_id
            class=move || format!("form__textarea {}", additional_class())
            placeholder=textarea_placeholder
            disabled=disabled
            rows=textarea_rows
            aria-describedby=describedby
            aria-invalid=invalid
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:blur=move |_| {
                if let Some(handler) = on_blur {
                    handler.run(());
                }
            }
        ></textarea>
    }
}
