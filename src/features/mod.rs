//! Widget features grouped by concern.

pub mod menu;
pub mod preferences;
pub mod sidebar;
pub mod theme;
