use leptos::prelude::*;

use crate::shared::forms::ControlBinding;

/// Select with (value, label) options. Picks up the ambient control
/// binding the same way `Input` does.
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the select element; overrides the form binding
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let binding = use_context::<Signal<ControlBinding>>();

    let select_id = move || match id.get() {
        Some(explicit) => explicit,
        None => binding.map(|b| b.get().id).unwrap_or_default(),
    };
    let describedby = move || binding.map(|b| b.get().describedby);
    let invalid = move || binding.map(|b| if b.get().invalid { "true" } else { "false" });
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            id=select_id
            class=move || format!("form__select {}", additional_class())
            disabled=disabled
            aria-describedby=describedby
            aria-invalid=invalid
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
