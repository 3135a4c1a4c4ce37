//! Static navigation table for the dashboard sidebar.
//!
//! Entries are listed in display order and are never re-sorted. Entries
//! without an image fall back to a glyph looked up by label.

/// Glyph used for labels missing from the default icon table.
pub const FALLBACK_GLYPH: &str = "•";

/// One navigation item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

/// What to draw in front of a menu label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Image(&'static str),
    Glyph(&'static str),
}

impl MenuEntry {
    const fn new(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            icon: None,
        }
    }

    const fn with_icon(path: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            path,
            label,
            icon: Some(icon),
        }
    }

    pub fn icon(&self) -> MenuIcon {
        match self.icon {
            Some(url) => MenuIcon::Image(url),
            None => MenuIcon::Glyph(default_icon(self.label)),
        }
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.path)
    }
}

pub static MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry::with_icon(
        "/",
        "Dashboard",
        concat!(
            "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366",
            "/12e5903a7437a6622d9d786c782556678c3707ee?placeholderIfAbsent=true"
        ),
    ),
    MenuEntry::new("/all-pages", "All pages"),
    MenuEntry::new("/reports", "Reports"),
    MenuEntry::new("/buoys", "Buoys"),
    MenuEntry::new("/products", "Products"),
    MenuEntry::new("/task", "Task"),
    MenuEntry::with_icon(
        "/features",
        "Features",
        concat!(
            "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366",
            "/42aa344d48d2bef4d72892ceaca37092f37bb2a2?placeholderIfAbsent=true"
        ),
    ),
    MenuEntry::new("/users", "Users"),
    MenuEntry::new("/pricing", "Pricing"),
    MenuEntry::with_icon(
        "/integrations",
        "Integrations",
        concat!(
            "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366",
            "/97b7656e71430abbc1ef12e9d65b1995bdfb310d?placeholderIfAbsent=true"
        ),
    ),
    MenuEntry::with_icon(
        "/settings",
        "Settings",
        concat!(
            "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366",
            "/471f192ad8be415d32dbbc4d11c0a02de1c43dcd?placeholderIfAbsent=true"
        ),
    ),
    MenuEntry::with_icon(
        "/templates",
        "Template pages",
        concat!(
            "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366",
            "/f85a79eac96da9e9679540e02558f6b61e4991db?placeholderIfAbsent=true"
        ),
    ),
];

/// Glyph for a label without an image icon. Exact, case-sensitive match.
pub fn default_icon(label: &str) -> &'static str {
    match label {
        "All pages" => "📄",
        "Reports" => "📊",
        "Buoys" => "🚢",
        "Products" => "📦",
        "Task" => "✓",
        "Users" => "👥",
        "Pricing" => "💰",
        _ => FALLBACK_GLYPH,
    }
}

/// Exact path comparison; no prefix or trailing-slash normalization.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
}

/// The entry highlighted for `current_path`, if any.
pub fn active_entry<'a>(entries: &'a [MenuEntry], current_path: &str) -> Option<&'a MenuEntry> {
    entries.iter().find(|entry| entry.is_active(current_path))
}
