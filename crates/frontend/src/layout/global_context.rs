use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages reachable from the navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Dashboard,
    Inventory,
    Communication,
    Reports,
}

impl PageKey {
    /// Navigation order.
    pub const ALL: [PageKey; 4] = [
        PageKey::Dashboard,
        PageKey::Inventory,
        PageKey::Communication,
        PageKey::Reports,
    ];

    /// Stable key used in the `?tab=` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Inventory => "inventory",
            PageKey::Communication => "communication",
            PageKey::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::Inventory => "Inventory",
            PageKey::Communication => "Communication",
            PageKey::Reports => "Reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Inventory => "package",
            PageKey::Communication => "message-square",
            PageKey::Reports => "file-text",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dashboard" => Some(PageKey::Dashboard),
            "inventory" => Some(PageKey::Inventory),
            "communication" => Some(PageKey::Communication),
            "reports" => Some(PageKey::Reports),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::Dashboard),
        }
    }

    pub fn activate(&self, page: PageKey) {
        self.active.set(page);
    }

    /// Restore the active page from `?tab=` and keep the URL in sync
    /// afterwards via `history.replaceState`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("tab").and_then(|code| PageKey::from_code(code)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                page.code().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_codes_round_trip() {
        for page in PageKey::ALL {
            assert_eq!(PageKey::from_code(page.code()), Some(page));
        }
        assert_eq!(PageKey::from_code("settings"), None);
    }

    #[test]
    fn navigation_starts_at_dashboard() {
        assert_eq!(PageKey::ALL[0], PageKey::Dashboard);
        assert_eq!(PageKey::ALL.len(), 4);
    }
}
