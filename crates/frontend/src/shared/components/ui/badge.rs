use contracts::domain::product::StockStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "accent", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Stock band badge for inventory rows and cards
#[component]
pub fn StatusBadge(
    /// Stock band to display
    #[prop(into)]
    status: Signal<StockStatus>,
) -> impl IntoView {
    let status_class = move || {
        format!(
            "badge badge--status badge--status-{}",
            status.get().code()
        )
    };

    view! {
        <span class=status_class>
            {move || status.get().label()}
        </span>
    }
}
