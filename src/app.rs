use crate::components::DashboardShell;
use crate::features::menu::{active_entry, MENU_ENTRIES};
use crate::features::theme::ThemeModeProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeModeProvider>
            <Router>
                <DashboardShell>
                    <PageTitle />
                </DashboardShell>
            </Router>
        </ThemeModeProvider>
    }
}

/// Heading for the current page; page bodies are provided by the host app.
#[component]
fn PageTitle() -> impl IntoView {
    let location = use_location();
    let title = move || {
        location.pathname.with(|path| {
            active_entry(MENU_ENTRIES, path).map_or("Not found", |entry| entry.label)
        })
    };

    view! { <h1 class="text-2xl font-semibold">{title}</h1> }
}
