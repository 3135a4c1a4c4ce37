//! Collapsible side navigation for the dashboard.
//!
//! The component owns the expand/collapse flag and nothing else. Theme,
//! storage, and the current route are injected by the caller. Copy, menu
//! rows, tooltips, and ARIA values come from `SidebarView`; dimensions come
//! from its `LayoutParameters`.

use crate::app_lib::{build_info, SidebarConfig, SidebarTheme};
use crate::components::ui::Tooltip;
use crate::features::menu::{MenuIcon, MENU_ENTRIES};
use crate::features::preferences::PreferenceStore;
use crate::features::sidebar::{LayoutParameters, MenuItemView, SidebarState, SidebarView};
use crate::features::theme::ThemeProvider;
use leptos::prelude::*;
use leptos_router::components::A;

const TOGGLE_TOOLTIP_ID: &str = "sidebar-tip-toggle";
const THEME_TOOLTIP_ID: &str = "sidebar-tip-theme";
const CTA_TOOLTIP_ID: &str = "sidebar-tip-cta";
const PROFILE_TOOLTIP_ID: &str = "sidebar-tip-profile";

#[component]
pub fn Sidebar<T, S>(
    theme: T,
    store: S,
    #[prop(into)] current_path: Signal<String>,
    #[prop(optional)] config: Option<SidebarConfig>,
) -> impl IntoView
where
    T: ThemeProvider + Copy + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let config = config.unwrap_or_else(SidebarConfig::load);
    let state = RwSignal::new(SidebarState::load(&store));
    tracing::info!(
        git = build_info::git_commit_hash(),
        expanded = state.get_untracked().is_expanded(),
        "sidebar mounted"
    );

    let sidebar = Memo::new(move |_| {
        current_path.with(|path| {
            SidebarView::build(&state.get(), theme.mode(), path, MENU_ENTRIES, &config)
        })
    });
    let layout = Signal::derive(move || sidebar.with(|view| view.layout));
    let section_padding = move || layout.get().section_padding_x;

    let (logo, profile) = sidebar.with_untracked(|view| (view.logo.clone(), view.profile.clone()));

    let on_toggle = move |_| {
        state.update(|state| {
            state.toggle(&store);
        });
    };

    view! {
        <nav
            role="navigation"
            aria-label=move || sidebar.with(|view| view.aria_label)
            aria-expanded=move || sidebar.with(SidebarView::aria_expanded)
            class=SidebarTheme::CONTAINER
            style=move || layout.get().container_style()
            data-build=build_info::git_commit_hash()
        >
            <button
                type="button"
                class=SidebarTheme::TOGGLE
                style:right=move || layout.get().toggle_right
                style:transform=move || layout.get().toggle_transform
                aria-label=move || sidebar.with(|view| view.toggle.aria_label)
                aria-describedby=TOGGLE_TOOLTIP_ID
                on:click=on_toggle
            >
                <span class=SidebarTheme::MATERIAL_ICON aria-hidden="true">
                    {move || sidebar.with(|view| view.toggle.icon)}
                </span>
                <Tooltip
                    id=TOGGLE_TOOLTIP_ID
                    text=Signal::derive(move || {
                        sidebar.with(|view| Some(view.toggle.tooltip.to_string()))
                    })
                    placement=Signal::derive(move || {
                        sidebar.with(|view| view.toggle.tooltip_placement)
                    })
                />
            </button>

            <div
                class=SidebarTheme::SECTION
                style:padding-left=section_padding
                style:padding-right=section_padding
            >
                <div
                    class=SidebarTheme::LOGO
                    style:gap=move || layout.get().logo_gap
                    style:justify-content=move || layout.get().logo_justify
                    style:margin-top=move || layout.get().logo_margin_top
                >
                    <img
                        src=logo.url
                        alt=logo.alt
                        class="h-8 w-8 min-w-8 transition-all duration-300 ease-in-out"
                    />
                    <SidebarLabel layout>
                        <span class="text-lg font-semibold text-gray-900 dark:text-white">
                            {logo.title}
                        </span>
                    </SidebarLabel>
                </div>
            </div>

            <div
                class=SidebarTheme::SECTION
                style:padding-left=section_padding
                style:padding-right=section_padding
            >
                <For
                    each=move || sidebar.with(|view| view.items.clone())
                    key=MenuItemView::render_key
                    let:item
                >
                    <SidebarLink item layout />
                </For>
            </div>

            <div
                class=SidebarTheme::SECTION
                style:padding-left=section_padding
                style:padding-right=section_padding
            >
                <div class=SidebarTheme::TOOLTIP_ANCHOR>
                    <button
                        type="button"
                        class=SidebarTheme::THEME_TOGGLE
                        style:width=move || layout.get().theme_toggle_width
                        style:padding=move || layout.get().theme_toggle_padding
                        style:gap=move || layout.get().theme_toggle_gap
                        style:justify-content=move || layout.get().theme_toggle_justify
                        style:margin-left=move || layout.get().theme_toggle_margin_x
                        style:margin-right=move || layout.get().theme_toggle_margin_x
                        aria-label=move || sidebar.with(|view| view.theme_toggle.aria_label)
                        aria-describedby=move || {
                            sidebar.with(|view| view.theme_toggle.tooltip.map(|_| THEME_TOOLTIP_ID))
                        }
                        on:click=move |_| theme.toggle_theme()
                    >
                        <span class=SidebarTheme::MATERIAL_ICON aria-hidden="true">
                            {move || sidebar.with(|view| view.theme_toggle.icon)}
                        </span>
                        <SidebarLabel layout>
                            <span class="text-sm">
                                {move || sidebar.with(|view| view.theme_toggle.label)}
                            </span>
                        </SidebarLabel>
                    </button>
                    <Tooltip
                        id=THEME_TOOLTIP_ID
                        text=Signal::derive(move || {
                            sidebar.with(|view| view.theme_toggle.tooltip.map(str::to_string))
                        })
                    />
                </div>
            </div>

            <hr class=SidebarTheme::DIVIDER />

            <div
                class="flex w-full justify-center transition-all duration-300 ease-in-out"
                style:padding=move || layout.get().cta_wrapper_padding
            >
                <div class=SidebarTheme::TOOLTIP_ANCHOR>
                    <button
                        type="button"
                        class=SidebarTheme::CTA
                        style:width=move || layout.get().cta_width
                        style:min-width=move || layout.get().cta_min_width
                        style:font-size=move || layout.get().cta_font_size
                        aria-describedby=move || {
                            sidebar.with(|view| view.cta.tooltip.as_ref().map(|_| CTA_TOOLTIP_ID))
                        }
                    >
                        {move || sidebar.with(|view| view.cta.text.clone())}
                    </button>
                    <Tooltip
                        id=CTA_TOOLTIP_ID
                        text=Signal::derive(move || sidebar.with(|view| view.cta.tooltip.clone()))
                    />
                </div>
            </div>

            <div
                class=format!("{} mt-auto pt-6 pb-8", SidebarTheme::SECTION)
                style:padding-left=section_padding
                style:padding-right=section_padding
            >
                <div class=SidebarTheme::TOOLTIP_ANCHOR>
                    <div
                        class=SidebarTheme::PROFILE
                        style:gap=move || layout.get().profile_gap
                        style:justify-content=move || layout.get().profile_justify
                        role="button"
                        tabindex="0"
                        aria-label=profile.avatar_alt.clone()
                        aria-describedby=move || {
                            sidebar.with(|view| view.profile.tooltip.as_ref().map(|_| PROFILE_TOOLTIP_ID))
                        }
                    >
                        <img src=profile.avatar_url alt=profile.avatar_alt class=SidebarTheme::AVATAR />
                        <SidebarLabel layout>
                            <p class="text-sm font-semibold text-gray-900 dark:text-white">
                                {profile.name}
                            </p>
                            <p class="text-xs text-gray-500 dark:text-slate-400">
                                {profile.subtitle}
                            </p>
                        </SidebarLabel>
                    </div>
                    <Tooltip
                        id=PROFILE_TOOLTIP_ID
                        text=Signal::derive(move || sidebar.with(|view| view.profile.tooltip.clone()))
                    />
                </div>
            </div>
        </nav>
    }
}

/// One menu row. Rows are keyed on their active and tooltip state, so each
/// instance renders a fixed `MenuItemView`.
#[component]
fn SidebarLink(item: MenuItemView, layout: Signal<LayoutParameters>) -> impl IntoView {
    let tooltip_id = item.tooltip_id();
    let described_by = item.tooltip.map(|_| tooltip_id.clone());
    let tooltip = item.tooltip.map(str::to_string);
    let active = item.active;

    view! {
        <div class=SidebarTheme::TOOLTIP_ANCHOR>
            <A
                href=item.path
                {..}
                class="block w-full no-underline text-inherit"
                aria-label=item.label
                aria-describedby=described_by
            >
                <div
                    role="menuitem"
                    class=item_class(active)
                    style:padding=move || layout.get().item_padding_for(active)
                    style:gap=move || layout.get().item_gap
                    style:justify-content=move || layout.get().item_justify
                    style:width=move || layout.get().item_width
                    style:margin=move || layout.get().item_margin
                >
                    <SidebarIcon icon=item.icon />
                    <SidebarLabel layout>
                        <span class="text-sm">{item.label}</span>
                    </SidebarLabel>
                </div>
            </A>
            <Tooltip id=tooltip_id text=Signal::from(tooltip) />
        </div>
    }
}

fn item_class(active: bool) -> String {
    if active {
        format!("{} {}", SidebarTheme::ITEM, SidebarTheme::ITEM_ACTIVE)
    } else {
        SidebarTheme::ITEM.to_string()
    }
}

#[component]
fn SidebarIcon(icon: MenuIcon) -> impl IntoView {
    match icon {
        MenuIcon::Image(url) => view! {
            <span class=SidebarTheme::ITEM_ICON>
                <img src=url alt="" class="block h-[18px] w-[18px]" />
            </span>
        }
        .into_any(),
        MenuIcon::Glyph(glyph) => view! {
            <span class=SidebarTheme::ITEM_ICON aria-hidden="true">
                {glyph}
            </span>
        }
        .into_any(),
    }
}

/// Text that fades and collapses to zero width with the sidebar.
#[component]
fn SidebarLabel(layout: Signal<LayoutParameters>, children: Children) -> impl IntoView {
    view! {
        <div
            class=SidebarTheme::LABEL
            aria-hidden=move || (!layout.get().labels_visible()).then_some("true")
            style:opacity=move || layout.get().label_opacity
            style:visibility=move || layout.get().label_visibility
            style:transform=move || layout.get().label_transform
            style:width=move || layout.get().label_width
        >
            {children()}
        </div>
    }
}
