use buoyhub_sidebar::{
    default_icon, is_active, MemoryStore, PreferenceStore, SidebarConfig, SidebarMode,
    SidebarState, SidebarView, ThemeMode, MENU_ENTRIES, SIDEBAR_EXPANDED_KEY,
};
use std::cell::Cell;

struct FixedTheme {
    mode: Cell<ThemeMode>,
}

impl buoyhub_sidebar::ThemeProvider for FixedTheme {
    fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    fn toggle_theme(&self) {
        self.mode.set(self.mode.get().toggled());
    }
}

fn render(state: &SidebarState, mode: ThemeMode, path: &str) -> SidebarView {
    SidebarView::build(state, mode, path, MENU_ENTRIES, &SidebarConfig::default())
}

#[test]
fn menu_renders_in_declared_order_with_reports_active() {
    let state = SidebarState::default();
    let view = render(&state, ThemeMode::Light, "/reports");

    let labels: Vec<&str> = view.items.iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        [
            "Dashboard",
            "All pages",
            "Reports",
            "Buoys",
            "Products",
            "Task",
            "Features",
            "Users",
            "Pricing",
            "Integrations",
            "Settings",
            "Template pages",
        ]
    );

    let active: Vec<&str> = view
        .items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect();
    assert_eq!(active, ["Reports"]);
}

#[test]
fn collapsed_sidebar_exposes_tooltips_everywhere() {
    let view = render(&SidebarState::new(false), ThemeMode::Dark, "/");

    assert!(!view.toggle.tooltip.is_empty());
    for item in &view.items {
        assert_eq!(item.tooltip, Some(item.label), "{}", item.label);
    }
    assert_eq!(view.theme_toggle.tooltip, Some("Switch to light mode"));
    assert!(view.cta.tooltip.as_deref().is_some_and(|text| !text.is_empty()));
    assert!(view
        .profile
        .tooltip
        .as_deref()
        .is_some_and(|text| !text.is_empty()));
}

#[test]
fn expanded_sidebar_suppresses_item_and_theme_tooltips() {
    let view = render(&SidebarState::new(true), ThemeMode::Light, "/");

    assert_eq!(view.toggle.tooltip, "Collapse sidebar");
    assert!(view.items.iter().all(|item| item.tooltip.is_none()));
    assert_eq!(view.theme_toggle.tooltip, None);
}

#[test]
fn mount_reads_the_persisted_preference() {
    let collapsed = MemoryStore::with_entries([(SIDEBAR_EXPANDED_KEY, "false")]);
    assert_eq!(SidebarState::load(&collapsed).mode(), SidebarMode::Collapsed);

    let missing = MemoryStore::new();
    assert_eq!(SidebarState::load(&missing).mode(), SidebarMode::Expanded);

    let invalid = MemoryStore::with_entries([(SIDEBAR_EXPANDED_KEY, "not json")]);
    assert_eq!(SidebarState::load(&invalid).mode(), SidebarMode::Expanded);
}

#[test]
fn every_toggle_is_written_through() {
    let store = MemoryStore::new();
    let mut state = SidebarState::load(&store);

    for _ in 0..5 {
        state.toggle(&store);
        assert_eq!(store.get_bool(SIDEBAR_EXPANDED_KEY), Some(state.is_expanded()));
        assert_eq!(
            store.get_string(SIDEBAR_EXPANDED_KEY).as_deref(),
            Some(if state.is_expanded() { "true" } else { "false" })
        );
    }
}

#[test]
fn theme_toggle_goes_through_the_provider_only() {
    use buoyhub_sidebar::ThemeProvider;

    let store = MemoryStore::new();
    let state = SidebarState::load(&store);
    let theme = FixedTheme {
        mode: Cell::new(ThemeMode::Light),
    };

    let before = render(&state, theme.mode(), "/");
    theme.toggle_theme();
    let after = render(&state, theme.mode(), "/");

    assert_eq!(before.theme_toggle.label, "Dark Mode");
    assert_eq!(after.theme_toggle.label, "Light Mode");
    assert_eq!(before.expanded, after.expanded);
    assert_eq!(store.get_string(SIDEBAR_EXPANDED_KEY), None);
}

#[test]
fn pure_helpers_match_their_tables() {
    assert_eq!(default_icon("Pricing"), "💰");
    assert_eq!(default_icon("Integrations"), "•");
    assert!(is_active("/users", "/users"));
    assert!(!is_active("/users", "/Users"));
}
