use leptos::prelude::*;

use crate::shared::forms::ControlBinding;

/// Text input. Inside a `FormControl` it picks the control binding up
/// from context: the bound id wins unless an explicit one is given, and
/// the aria wiring follows the field's validation state.
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Fired when the Enter key is pressed
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the input element; overrides the form binding
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let binding = use_context::<Signal<ControlBinding>>();

    let input_id = move || match id.get() {
        Some(explicit) => explicit,
        None => binding.map(|b| b.get().id).unwrap_or_default(),
    };
    let describedby = move || binding.map(|b| b.get().describedby);
    let invalid = move || binding.map(|b| if b.get().invalid { "true" } else { "false" });
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            class=move || format!("form__input {}", additional_class())
            type=input_t
            prop:value=move || value.get()
            placeholder=input_placeholder
            disabled=disabled
            aria-describedby=describedby
            aria-invalid=invalid
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
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    if let Some(handler) = on_enter {
                        handler.run(());
                    }
                }
            }
        />
    }
}
