//! Tailwind class constants for the sidebar chrome. Dimensions that depend on
//! the expanded flag are not here; they come from `LayoutParameters` as inline
//! styles so the width transition can animate.

pub struct SidebarTheme;

impl SidebarTheme {
    /// Outer navigation container. Width and overflow come from the inline
    /// style set by the layout.
    pub const CONTAINER: &'static str = "relative z-[1000] flex flex-col bg-white dark:bg-slate-900 shadow-[0px_8px_28px_0px_rgba(1,5,17,0.30)] pt-[15px] md:pt-5 w-[var(--sidebar-width-mobile)] md:w-[var(--sidebar-width)] transition-[width] duration-300 ease-in-out";

    pub const TOGGLE: &'static str = "group absolute top-[15px] z-[1001] flex h-8 w-8 items-center justify-center rounded-full border border-gray-200 dark:border-slate-700 bg-gray-50 dark:bg-slate-950 text-violet-600 dark:text-violet-400 hover:bg-gray-100 dark:hover:bg-slate-800 hover:border-violet-500 transition-all duration-300 ease-in-out";

    pub const SECTION: &'static str = "transition-[padding] duration-300 ease-in-out";

    pub const LOGO: &'static str = "flex items-center mb-[30px] overflow-hidden whitespace-nowrap transition-all duration-300 ease-in-out";

    /// Menu row in its resting state.
    pub const ITEM: &'static str = "relative flex min-h-12 items-center rounded-lg cursor-pointer no-underline text-gray-500 dark:text-slate-400 hover:bg-gray-100 dark:hover:bg-slate-800 hover:text-gray-900 dark:hover:text-white transition-all duration-300 ease-in-out";

    /// Extra classes for the entry matching the current path.
    pub const ITEM_ACTIVE: &'static str = "bg-violet-500/20 text-violet-600 dark:text-violet-400 border-l-[3px] border-violet-500";

    pub const ITEM_ICON: &'static str = "flex h-[18px] w-[18px] min-w-[18px] items-center justify-center text-center text-[18px] opacity-80";

    pub const LABEL: &'static str = "whitespace-nowrap overflow-hidden font-medium transition-all duration-300 ease-in-out";

    pub const THEME_TOGGLE: &'static str = "flex h-12 items-center mb-3 rounded-lg border border-gray-200 dark:border-slate-700 bg-gray-50 dark:bg-slate-950 text-gray-500 dark:text-slate-400 hover:bg-gray-100 dark:hover:bg-slate-800 hover:border-violet-500 transition-all duration-300 ease-in-out";

    pub const DIVIDER: &'static str = "my-6 mx-4 border-gray-200 dark:border-slate-700 opacity-20";

    pub const CTA: &'static str = "py-3 rounded-lg overflow-hidden font-semibold text-white normal-case bg-[linear-gradient(128deg,#CB3CFF_19.86%,#7F25FB_68.34%)] hover:bg-[linear-gradient(128deg,#D76AFF_19.86%,#9B4FFF_68.34%)] transition-all duration-300 ease-in-out";

    pub const PROFILE: &'static str = "flex items-center p-2 rounded-lg cursor-pointer hover:bg-gray-100 dark:hover:bg-slate-800 transition-all duration-300 ease-in-out";

    pub const AVATAR: &'static str = "h-10 w-10 min-w-10 rounded-full border-2 border-[rgba(203,60,255,0.2)]";

    /// Wraps a control and its tooltip so hover and focus reveal the hint.
    pub const TOOLTIP_ANCHOR: &'static str = "group relative";

    /// Floating hint shown on hover and keyboard focus of the parent `group`.
    pub const TOOLTIP: &'static str = "pointer-events-none absolute left-full top-1/2 ml-3 -translate-y-1/2 whitespace-nowrap rounded-md bg-gray-900 px-2 py-1 text-xs text-white opacity-0 shadow-lg group-hover:opacity-100 group-focus-within:opacity-100 transition-opacity z-[1100]";

    /// Tooltip variant that drops below its anchor, for controls near the right edge.
    pub const TOOLTIP_BELOW: &'static str = "pointer-events-none absolute right-0 top-full mt-2 whitespace-nowrap rounded-md bg-gray-900 px-2 py-1 text-xs text-white opacity-0 shadow-lg group-hover:opacity-100 group-focus-within:opacity-100 transition-opacity z-[1100]";

    pub const MATERIAL_ICON: &'static str = "material-symbols-outlined text-[20px]";
}
