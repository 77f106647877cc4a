//! Page navigation strip under the top header.

use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn PageNav() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let tabs: Vec<_> = PageKey::ALL
        .iter()
        .map(|page| {
            let page = *page;
            let is_active = move || ctx.active.get() == page;
            view! {
                <button
                    type="button"
                    class=move || {
                        if is_active() {
                            "page-nav__tab page-nav__tab--active"
                        } else {
                            "page-nav__tab"
                        }
                    }
                    on:click=move |_| ctx.activate(page)
                >
                    {icon(page.icon())}
                    <span>{page.title()}</span>
                </button>
            }
        })
        .collect();

    view! { <nav class="page-nav">{tabs}</nav> }
}
