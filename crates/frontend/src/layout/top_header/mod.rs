//! TopHeader component - application top bar.
//!
//! Contains:
//! - Store brand and subtitle
//! - Signed-in user info and avatar

use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <h1 class="top-header__title">"SuperMarket IMS"</h1>
                <p class="top-header__subtitle">"Inventory Management System"</p>
            </div>

            <div class="top-header__user">
                <div class="top-header__user-info">
                    <p class="top-header__user-name">"Manager User"</p>
                    <p class="top-header__user-email">"manager@store.com"</p>
                </div>
                <div class="top-header__avatar">"MU"</div>
            </div>
        </div>
    }
}
