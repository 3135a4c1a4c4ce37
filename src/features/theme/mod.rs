//! Light/dark mode as seen by the sidebar. The widget never owns the mode; it
//! reads it through `ThemeProvider` and asks the provider to flip it.

#[cfg(target_arch = "wasm32")]
mod context;

#[cfg(target_arch = "wasm32")]
pub use context::{use_theme, ThemeContext, ThemeModeProvider};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Accessible name and tooltip for the theme toggle: it names the mode it switches to.
    pub fn toggle_action(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light mode",
            ThemeMode::Light => "Switch to dark mode",
        }
    }

    /// Visible caption on the expanded theme toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light Mode",
            ThemeMode::Light => "Dark Mode",
        }
    }

    /// Material Symbols name of the icon for the mode the toggle switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "light_mode",
            ThemeMode::Light => "dark_mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = crate::app_lib::AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(crate::app_lib::AppError::Config(format!(
                "unknown theme mode: {other}"
            ))),
        }
    }
}

/// Theme collaborator injected into the sidebar.
pub trait ThemeProvider {
    fn mode(&self) -> ThemeMode;
    fn toggle_theme(&self);
}
