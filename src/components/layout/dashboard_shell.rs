//! Page frame with the sidebar on the left and route content on the right.

use super::Sidebar;
use crate::features::preferences::LocalStorageStore;
use crate::features::theme::use_theme;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Wraps routes with the navigation sidebar. Must render inside a `Router`.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let theme = use_theme();
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    view! {
        <div class="flex min-h-screen bg-gray-50 dark:bg-slate-950 text-gray-900 dark:text-white">
            <Sidebar theme store=LocalStorageStore current_path />
            <main class="flex-1 overflow-y-auto">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
