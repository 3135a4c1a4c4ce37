//! Shared widget utilities for configuration, errors, logging, styling, and
//! build metadata.
//!
//! Nothing in here touches the sidebar state directly. Callers get plain data
//! (`SidebarConfig`, `SidebarTheme` class strings) and a single `AppError`
//! type; failures inside the widget are logged through `tracing` and never
//! surfaced to the user.

pub mod build_info;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod theme;

pub use config::SidebarConfig;
pub use errors::AppError;
pub use theme::SidebarTheme;
