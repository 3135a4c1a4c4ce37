use crate::app_lib::SidebarTheme;
use crate::features::sidebar::TooltipPlacement;
use leptos::prelude::*;

/// Hover/focus hint for the control inside the same `TOOLTIP_ANCHOR`.
///
/// Renders nothing while `text` is `None`. The control should point at `id`
/// through `aria-describedby` so assistive tech announces the hint on focus.
#[component]
pub fn Tooltip(
    #[prop(into)] id: String,
    #[prop(into)] text: Signal<Option<String>>,
    #[prop(optional, into, default = Signal::from(TooltipPlacement::Right))] placement: Signal<
        TooltipPlacement,
    >,
) -> impl IntoView {
    let class = move || match placement.get() {
        TooltipPlacement::Right => SidebarTheme::TOOLTIP,
        TooltipPlacement::Below => SidebarTheme::TOOLTIP_BELOW,
    };

    view! {
        <Show when=move || text.with(Option::is_some)>
            <span id=id.clone() role="tooltip" class=class>
                {move || text.get().unwrap_or_default()}
            </span>
        </Show>
    }
}
