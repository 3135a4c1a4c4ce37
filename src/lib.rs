//! Collapsible navigation sidebar for the Buoy Hub dashboard.
//!
//! The widget toggles between an expanded and a collapsed rail, remembers the
//! choice under the `sidebar-expanded` preference key, and highlights the
//! menu entry matching the current route. Its collaborators are injected:
//!
//! - a [`ThemeProvider`](features::theme::ThemeProvider) for light/dark mode,
//! - a [`PreferenceStore`](features::preferences::PreferenceStore) for persistence,
//! - the current path as a reactive signal.
//!
//! Everything under `features` is plain Rust and runs on any target. The
//! Leptos components, the `localStorage` backend, and the theme context are
//! compiled for `wasm32` only.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;

pub use app_lib::{AppError, SidebarConfig};
pub use features::menu::{default_icon, is_active, MenuEntry, MenuIcon, MENU_ENTRIES};
pub use features::preferences::{MemoryStore, PreferenceStore, SIDEBAR_EXPANDED_KEY};
pub use features::sidebar::{LayoutParameters, SidebarMode, SidebarState, SidebarView};
pub use features::theme::{ThemeMode, ThemeProvider};
