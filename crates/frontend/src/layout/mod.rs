pub mod global_context;
pub mod nav;
pub mod top_header;

use crate::pages::communication::CommunicationPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::inventory::InventoryPage;
use crate::pages::reports::ReportsPage;
use global_context::{AppGlobalContext, PageKey};
use leptos::prelude::*;
use nav::PageNav;
use top_header::TopHeader;

/// Application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |               TopHeader                   |
/// |               PageNav                     |
/// +------------------------------------------+
/// |             active page                   |
/// +------------------------------------------+
/// ```
///
/// Pages remount on tab switch, so per-page selection state resets
/// when navigating away.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Runs once when the shell is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <TopHeader />
                <PageNav />
            </header>
            <main class="app-main">{move || render_page(ctx.active.get())}</main>
        </div>
    }
}

fn render_page(page: PageKey) -> AnyView {
    match page {
        PageKey::Dashboard => view! { <DashboardPage /> }.into_any(),
        PageKey::Inventory => view! { <InventoryPage /> }.into_any(),
        PageKey::Communication => view! { <CommunicationPage /> }.into_any(),
        PageKey::Reports => view! { <ReportsPage /> }.into_any(),
    }
}
