//! Sidebar behavior that does not need a browser: the expand/collapse state
//! machine, the layout derived from it, and the render model.

pub mod layout;
pub mod state;
pub mod view_model;

pub use layout::LayoutParameters;
pub use state::{SidebarMode, SidebarState};
pub use view_model::{MenuItemView, SidebarView, TooltipPlacement};
