//! Expand/collapse state with write-through persistence.

use crate::features::preferences::{PreferenceStore, SIDEBAR_EXPANDED_KEY};

/// The two presentations of the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SidebarMode {
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn toggled(self) -> Self {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }
}

impl From<bool> for SidebarMode {
    fn from(expanded: bool) -> Self {
        if expanded {
            SidebarMode::Expanded
        } else {
            SidebarMode::Collapsed
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    expanded: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl SidebarState {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    /// Restores the saved preference. Missing or malformed values mean expanded.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        match store.get_bool(SIDEBAR_EXPANDED_KEY) {
            Some(expanded) => Self { expanded },
            None => Self::default(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn mode(&self) -> SidebarMode {
        SidebarMode::from(self.expanded)
    }

    /// Flips the state and writes the new value through to `store`.
    ///
    /// Persistence is best effort: a failed write is logged and the in-memory
    /// state still changes.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &S) -> SidebarMode {
        self.expanded = !self.expanded;
        tracing::debug!(expanded = self.expanded, "sidebar toggled");
        if let Err(error) = store.set_bool(SIDEBAR_EXPANDED_KEY, self.expanded) {
            tracing::warn!(%error, "failed to persist sidebar preference");
        }
        self.mode()
    }
}
