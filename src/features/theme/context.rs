//! Theme context shared through Leptos. The provider restores the saved mode
//! once on mount, then mirrors every change into storage and onto the
//! document root as the Tailwind `dark` class.

use super::{ThemeMode, ThemeProvider};
use crate::features::preferences::{LocalStorageStore, PreferenceStore, THEME_MODE_KEY};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(mode),
        }
    }
}

impl ThemeProvider for ThemeContext {
    fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    fn toggle_theme(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }
}

/// Provides the theme context and keeps storage and the document class in sync.
#[component]
pub fn ThemeModeProvider(children: Children) -> impl IntoView {
    let store = LocalStorageStore;
    let initial = store
        .get_string(THEME_MODE_KEY)
        .and_then(|raw| raw.parse::<ThemeMode>().ok())
        .unwrap_or_default();
    let theme = ThemeContext::new(initial);
    provide_context(theme);

    Effect::new(move |_| {
        let mode = theme.mode.get();
        apply_document_class(mode);
        if let Err(error) = store.set_string(THEME_MODE_KEY, mode.as_str()) {
            tracing::warn!(%error, "failed to persist theme mode");
        }
    });

    view! { {children()} }
}

/// Returns the current theme context or a light fallback.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext::new(ThemeMode::Light))
}

fn apply_document_class(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match mode {
        ThemeMode::Dark => classes.add_1("dark"),
        ThemeMode::Light => classes.remove_1("dark"),
    };
    if result.is_err() {
        tracing::debug!(mode = mode.as_str(), "could not update document theme class");
    }
}
