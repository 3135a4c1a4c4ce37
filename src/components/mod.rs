//! Leptos components for the dashboard chrome.

pub mod layout;
pub mod ui;

pub use layout::{DashboardShell, Sidebar};
pub use ui::Tooltip;
