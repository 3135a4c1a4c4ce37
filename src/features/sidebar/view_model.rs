//! Everything the sidebar renders, computed from the state, the theme mode,
//! and the current path. The Leptos component only binds these values, so
//! the accessibility contract is tested here without a browser.

use super::layout::LayoutParameters;
use super::state::SidebarState;
use crate::app_lib::SidebarConfig;
use crate::features::menu::{MenuEntry, MenuIcon};
use crate::features::theme::ThemeMode;

pub const NAV_ARIA_LABEL: &str = "Main navigation";
pub const COLLAPSE_LABEL: &str = "Collapse sidebar";
pub const EXPAND_LABEL: &str = "Expand sidebar";

/// Where a tooltip floats relative to its control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipPlacement {
    #[default]
    Right,
    Below,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleButtonView {
    pub aria_label: &'static str,
    /// Always present, in both states.
    pub tooltip: &'static str,
    /// Below while expanded, where the rail clips overflow; to the right of
    /// the collapsed rail otherwise.
    pub tooltip_placement: TooltipPlacement,
    /// Material Symbols icon name.
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItemView {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: MenuIcon,
    pub active: bool,
    pub tooltip: Option<&'static str>,
}

impl MenuItemView {
    pub fn new(entry: &MenuEntry, expanded: bool, current_path: &str) -> Self {
        Self {
            path: entry.path,
            label: entry.label,
            icon: entry.icon(),
            active: entry.is_active(current_path),
            tooltip: (!expanded).then_some(entry.label),
        }
    }

    /// Identity of a rendered row. A row is rebuilt whenever its highlight or
    /// tooltip changes.
    pub fn render_key(&self) -> (&'static str, bool, bool) {
        (self.path, self.active, self.tooltip.is_some())
    }

    /// DOM id of the tooltip describing this item.
    pub fn tooltip_id(&self) -> String {
        let slug: String = self
            .label
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("sidebar-tip-{slug}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub aria_label: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub tooltip: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToActionView {
    pub text: String,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub subtitle: String,
    pub avatar_url: String,
    pub avatar_alt: String,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoView {
    pub url: String,
    pub alt: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarView {
    pub expanded: bool,
    pub aria_label: &'static str,
    pub layout: LayoutParameters,
    pub toggle: ToggleButtonView,
    pub logo: LogoView,
    pub items: Vec<MenuItemView>,
    pub theme_toggle: ThemeToggleView,
    pub cta: CallToActionView,
    pub profile: ProfileView,
}

impl SidebarView {
    pub fn build(
        state: &SidebarState,
        theme_mode: ThemeMode,
        current_path: &str,
        entries: &[MenuEntry],
        config: &SidebarConfig,
    ) -> Self {
        let expanded = state.is_expanded();
        let collapsed_only = |text: &'static str| (!expanded).then_some(text);

        let toggle_label = if expanded { COLLAPSE_LABEL } else { EXPAND_LABEL };
        let toggle = ToggleButtonView {
            aria_label: toggle_label,
            tooltip: toggle_label,
            tooltip_placement: if expanded {
                TooltipPlacement::Below
            } else {
                TooltipPlacement::Right
            },
            icon: if expanded { "chevron_left" } else { "menu" },
        };

        let items = entries
            .iter()
            .map(|entry| MenuItemView::new(entry, expanded, current_path))
            .collect();

        let theme_toggle = ThemeToggleView {
            aria_label: theme_mode.toggle_action(),
            label: theme_mode.toggle_label(),
            icon: theme_mode.toggle_icon(),
            tooltip: collapsed_only(theme_mode.toggle_action()),
        };

        let cta = CallToActionView {
            text: if expanded {
                config.cta_label.clone()
            } else {
                config.cta_short_label.clone()
            },
            tooltip: (!expanded).then(|| config.cta_label.clone()),
        };

        let profile = ProfileView {
            name: config.profile_name.clone(),
            subtitle: config.profile_subtitle.clone(),
            avatar_url: config.avatar_url.clone(),
            avatar_alt: config.profile_alt(),
            tooltip: (!expanded).then(|| config.profile_tooltip()),
        };

        let logo = LogoView {
            url: config.logo_url.clone(),
            alt: config.logo_alt.clone(),
            title: config.brand_name.clone(),
        };

        Self {
            expanded,
            aria_label: NAV_ARIA_LABEL,
            layout: LayoutParameters::for_expanded(expanded),
            toggle,
            logo,
            items,
            theme_toggle,
            cta,
            profile,
        }
    }

    /// The highlighted item, if the current path matches one.
    pub fn active_item(&self) -> Option<&MenuItemView> {
        self.items.iter().find(|item| item.active)
    }

    /// `aria-expanded` attribute value.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::menu::MENU_ENTRIES;

    fn view(expanded: bool, mode: ThemeMode, path: &str) -> SidebarView {
        SidebarView::build(
            &SidebarState::new(expanded),
            mode,
            path,
            MENU_ENTRIES,
            &SidebarConfig::default(),
        )
    }

    #[test]
    fn toggle_button_always_has_a_tooltip() {
        let expanded = view(true, ThemeMode::Light, "/");
        assert_eq!(expanded.toggle.tooltip, "Collapse sidebar");
        assert_eq!(expanded.toggle.aria_label, "Collapse sidebar");
        assert_eq!(expanded.toggle.icon, "chevron_left");

        let collapsed = view(false, ThemeMode::Light, "/");
        assert_eq!(collapsed.toggle.tooltip, "Expand sidebar");
        assert_eq!(collapsed.toggle.icon, "menu");
    }

    #[test]
    fn toggle_tooltip_floats_right_of_the_collapsed_rail() {
        let expanded = view(true, ThemeMode::Light, "/");
        assert_eq!(expanded.toggle.tooltip_placement, TooltipPlacement::Below);
        assert_eq!(expanded.layout.container_overflow, "hidden");

        let collapsed = view(false, ThemeMode::Light, "/");
        assert_eq!(collapsed.toggle.tooltip_placement, TooltipPlacement::Right);
        assert_eq!(collapsed.layout.container_overflow, "visible");
    }

    #[test]
    fn aria_expanded_mirrors_state() {
        assert_eq!(view(true, ThemeMode::Light, "/").aria_expanded(), "true");
        assert_eq!(view(false, ThemeMode::Light, "/").aria_expanded(), "false");
        assert_eq!(view(true, ThemeMode::Light, "/").aria_label, "Main navigation");
    }

    #[test]
    fn theme_toggle_reflects_mode() {
        let dark = view(true, ThemeMode::Dark, "/");
        assert_eq!(dark.theme_toggle.aria_label, "Switch to light mode");
        assert_eq!(dark.theme_toggle.label, "Light Mode");
        assert_eq!(dark.theme_toggle.tooltip, None);

        let light = view(false, ThemeMode::Light, "/");
        assert_eq!(light.theme_toggle.aria_label, "Switch to dark mode");
        assert_eq!(light.theme_toggle.tooltip, Some("Switch to dark mode"));
    }

    #[test]
    fn cta_shortens_when_collapsed() {
        let expanded = view(true, ThemeMode::Light, "/");
        assert_eq!(expanded.cta.text, "Get a buoy");
        assert_eq!(expanded.cta.tooltip, None);

        let collapsed = view(false, ThemeMode::Light, "/");
        assert_eq!(collapsed.cta.text, "GT");
        assert_eq!(collapsed.cta.tooltip.as_deref(), Some("Get a buoy"));
    }

    #[test]
    fn profile_tooltip_only_when_collapsed() {
        assert_eq!(view(true, ThemeMode::Light, "/").profile.tooltip, None);
        let collapsed = view(false, ThemeMode::Light, "/");
        assert_eq!(
            collapsed.profile.tooltip.as_deref(),
            Some("John Carter - Account settings")
        );
        assert_eq!(collapsed.profile.avatar_alt, "John Carter Profile");
    }

    #[test]
    fn no_item_is_active_for_unknown_paths() {
        let sidebar = view(true, ThemeMode::Light, "/reports/weekly");
        assert!(sidebar.active_item().is_none());
        assert!(sidebar.items.iter().all(|item| !item.active));
    }

    #[test]
    fn glyph_icons_come_from_labels() {
        let sidebar = view(true, ThemeMode::Light, "/");
        let buoys = sidebar
            .items
            .iter()
            .find(|item| item.label == "Buoys")
            .expect("buoys entry");
        assert_eq!(buoys.icon, MenuIcon::Glyph("🚢"));
    }

    #[test]
    fn row_keys_change_with_highlight_and_collapse() {
        let key_of = |sidebar: &SidebarView, label: &str| {
            sidebar
                .items
                .iter()
                .find(|item| item.label == label)
                .map(MenuItemView::render_key)
        };
        let on_reports = view(true, ThemeMode::Light, "/reports");
        let on_users = view(true, ThemeMode::Light, "/users");
        let collapsed = view(false, ThemeMode::Light, "/reports");

        assert_eq!(key_of(&on_reports, "Reports"), Some(("/reports", true, false)));
        assert_eq!(key_of(&on_users, "Reports"), Some(("/reports", false, false)));
        assert_eq!(key_of(&collapsed, "Reports"), Some(("/reports", true, true)));
        assert_eq!(
            on_reports.active_item().map(|item| item.label),
            Some("Reports")
        );
    }

    #[test]
    fn tooltip_ids_are_unique_slugs() {
        let sidebar = view(false, ThemeMode::Light, "/");
        let ids: Vec<String> = sidebar.items.iter().map(MenuItemView::tooltip_id).collect();
        assert_eq!(ids[1], "sidebar-tip-all-pages");
        assert_eq!(ids[11], "sidebar-tip-template-pages");
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn theme_changes_do_not_touch_expansion() {
        let light = view(false, ThemeMode::Light, "/");
        let dark = view(false, ThemeMode::Dark, "/");
        assert_eq!(light.expanded, dark.expanded);
        assert_eq!(light.layout, dark.layout);
    }
}
