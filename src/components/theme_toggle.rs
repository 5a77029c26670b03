use dioxus::prelude::*;
use log::debug;
use crate::utils::{ ThemeState, ToggleView };

pub const TOGGLE_LABEL: &str = "Toggle theme";

/// Icon button that flips the theme. Renders nothing unless `state` is
/// switchable and carries a toggle action.
#[component]
pub fn ThemeToggle(state: ThemeState) -> Element {
    let icon = match state.view() {
        ToggleView::Hidden => {
            debug!("Theme toggle hidden (switchable={})", state.switchable);
            return rsx! {};
        }
        ToggleView::Visible { icon } => icon,
    };
    let is_dark = state.theme.is_dark();

    rsx! {
        button {
            r#type: "button",
            aria_label: TOGGLE_LABEL,
            title: icon.title(),
            class: if is_dark {
                "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
            } else {
                "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
            },
            onclick: move |_| {
                state.activate();
            },
            {icon.glyph()}
        }
    }
}
