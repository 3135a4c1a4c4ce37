//! Pure mapping from the expanded flag to every dimension the sidebar renders.
//! Values are CSS strings so the component can bind them as inline styles and
//! let `transition` animate between the two presentations.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutParameters {
    pub container_width: &'static str,
    pub container_width_mobile: &'static str,
    pub container_overflow: &'static str,

    pub toggle_right: &'static str,
    pub toggle_transform: &'static str,

    pub section_padding_x: &'static str,

    pub logo_gap: &'static str,
    pub logo_justify: &'static str,
    pub logo_margin_top: &'static str,

    pub item_padding: &'static str,
    pub item_padding_vertical: &'static str,
    pub item_active_padding_left: &'static str,
    pub item_gap: &'static str,
    pub item_justify: &'static str,
    pub item_width: &'static str,
    pub item_margin: &'static str,

    pub label_opacity: &'static str,
    pub label_visibility: &'static str,
    pub label_transform: &'static str,
    pub label_width: &'static str,

    pub theme_toggle_width: &'static str,
    pub theme_toggle_padding: &'static str,
    pub theme_toggle_gap: &'static str,
    pub theme_toggle_justify: &'static str,
    pub theme_toggle_margin_x: &'static str,

    pub cta_wrapper_padding: &'static str,
    pub cta_width: &'static str,
    pub cta_min_width: &'static str,
    pub cta_font_size: &'static str,

    pub profile_gap: &'static str,
    pub profile_justify: &'static str,
}

const EXPANDED: LayoutParameters = LayoutParameters {
    container_width: "280px",
    container_width_mobile: "100%",
    container_overflow: "hidden",
    toggle_right: "15px",
    toggle_transform: "none",
    section_padding_x: "20px",
    logo_gap: "12px",
    logo_justify: "flex-start",
    logo_margin_top: "20px",
    item_padding: "14px 20px",
    item_padding_vertical: "14px",
    item_active_padding_left: "17px",
    item_gap: "12px",
    item_justify: "flex-start",
    item_width: "auto",
    item_margin: "2px 0",
    label_opacity: "1",
    label_visibility: "visible",
    label_transform: "translateX(0)",
    label_width: "auto",
    theme_toggle_width: "100%",
    theme_toggle_padding: "0 16px",
    theme_toggle_gap: "12px",
    theme_toggle_justify: "flex-start",
    theme_toggle_margin_x: "0",
    cta_wrapper_padding: "0 20px",
    cta_width: "100%",
    cta_min_width: "auto",
    cta_font_size: "14px",
    profile_gap: "12px",
    profile_justify: "flex-start",
};

// Collapsed controls are centered 48px squares; the logo drops below the toggle button.
// Overflow stays visible so tooltips can float past the rail.
const COLLAPSED: LayoutParameters = LayoutParameters {
    container_width: "80px",
    container_width_mobile: "70px",
    container_overflow: "visible",
    toggle_right: "50%",
    toggle_transform: "translateX(50%)",
    section_padding_x: "16px",
    logo_gap: "0",
    logo_justify: "center",
    logo_margin_top: "60px",
    item_padding: "14px 0",
    item_padding_vertical: "14px",
    item_active_padding_left: "0",
    item_gap: "0",
    item_justify: "center",
    item_width: "48px",
    item_margin: "2px auto",
    label_opacity: "0",
    label_visibility: "hidden",
    label_transform: "translateX(-10px)",
    label_width: "0",
    theme_toggle_width: "48px",
    theme_toggle_padding: "0",
    theme_toggle_gap: "0",
    theme_toggle_justify: "center",
    theme_toggle_margin_x: "auto",
    cta_wrapper_padding: "0",
    cta_width: "48px",
    cta_min_width: "48px",
    cta_font_size: "12px",
    profile_gap: "0",
    profile_justify: "center",
};

impl LayoutParameters {
    pub const fn for_expanded(expanded: bool) -> Self {
        if expanded {
            EXPANDED
        } else {
            COLLAPSED
        }
    }

    /// Item padding shorthand, with the left side narrowed for the active
    /// entry's border accent.
    pub fn item_padding_for(&self, active: bool) -> String {
        if active {
            format!(
                "{} {} {}",
                self.item_padding, self.item_padding_vertical, self.item_active_padding_left
            )
        } else {
            self.item_padding.to_string()
        }
    }

    /// Inline container style: the custom properties read by the responsive
    /// width classes, plus overflow.
    pub fn container_style(&self) -> String {
        format!(
            "--sidebar-width: {}; --sidebar-width-mobile: {}; overflow: {};",
            self.container_width, self.container_width_mobile, self.container_overflow
        )
    }

    /// Whether text labels take up space. Only the expanded layout shows them.
    pub fn labels_visible(&self) -> bool {
        self.label_visibility == "visible"
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutParameters;

    #[test]
    fn widths_follow_the_flag() {
        let expanded = LayoutParameters::for_expanded(true);
        let collapsed = LayoutParameters::for_expanded(false);

        assert_eq!(expanded.container_width, "280px");
        assert_eq!(collapsed.container_width, "80px");
        assert_eq!(expanded.container_width_mobile, "100%");
        assert_eq!(collapsed.container_width_mobile, "70px");
        assert_eq!(expanded.item_width, "auto");
        assert_eq!(collapsed.item_width, "48px");
        assert_eq!(collapsed.theme_toggle_width, "48px");
        assert_eq!(collapsed.cta_width, "48px");
    }

    #[test]
    fn labels_hide_when_collapsed() {
        let expanded = LayoutParameters::for_expanded(true);
        let collapsed = LayoutParameters::for_expanded(false);

        assert!(expanded.labels_visible());
        assert_eq!(expanded.label_opacity, "1");
        assert!(!collapsed.labels_visible());
        assert_eq!(collapsed.label_opacity, "0");
        assert_eq!(collapsed.label_width, "0");
    }

    #[test]
    fn collapsed_controls_are_centered() {
        let collapsed = LayoutParameters::for_expanded(false);
        assert_eq!(collapsed.item_justify, "center");
        assert_eq!(collapsed.theme_toggle_justify, "center");
        assert_eq!(collapsed.profile_justify, "center");
        assert_eq!(collapsed.toggle_right, "50%");
        assert_eq!(collapsed.toggle_transform, "translateX(50%)");
        assert_eq!(collapsed.logo_margin_top, "60px");
    }

    #[test]
    fn active_item_padding_leaves_room_for_the_border() {
        let expanded = LayoutParameters::for_expanded(true);
        assert_eq!(expanded.item_padding_for(false), "14px 20px");
        assert_eq!(
            expanded.item_padding_for(true),
            "14px 20px 14px 17px"
        );
        assert_eq!(
            LayoutParameters::for_expanded(false).item_padding_for(true),
            "14px 0 14px 0"
        );
    }

    #[test]
    fn container_style_carries_both_widths() {
        assert_eq!(
            LayoutParameters::for_expanded(false).container_style(),
            "--sidebar-width: 80px; --sidebar-width-mobile: 70px; overflow: visible;"
        );
        assert_eq!(
            LayoutParameters::for_expanded(true).container_style(),
            "--sidebar-width: 280px; --sidebar-width-mobile: 100%; overflow: hidden;"
        );
    }
}
