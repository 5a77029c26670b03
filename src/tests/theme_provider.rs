use dioxus::prelude::*;
use crate::components::{ use_theme_state, ThemeProvider, ThemeToggle };
use crate::configs::ThemeConfig;
use crate::utils::{ Theme, ToggleIcon };
use super::common::{ render_settled, setup };

#[component]
fn ToggleOnMount(press: bool) -> Element {
    let state = use_theme_state();
    use_hook(|| {
        if press {
            state.activate();
        }
    });

    rsx! {
        ThemeToggle { state }
    }
}

#[component]
fn ProviderHarness(config: ThemeConfig, press: bool) -> Element {
    rsx! {
        ThemeProvider {
            config,
            ToggleOnMount { press }
        }
    }
}

fn render_provider(default_theme: Theme, switchable: bool, press: bool) -> String {
    render_settled(ProviderHarness, ProviderHarnessProps {
        config: ThemeConfig { default_theme, switchable },
        press,
    })
}

#[test]
fn test_starts_from_configured_theme() {
    setup();
    let html = render_provider(Theme::Light, true, false);

    assert!(!html.contains(r#"class="dark""#), "{html}");
    assert!(html.contains(ToggleIcon::Moon.glyph()), "{html}");
}

#[test]
fn test_toggle_flips_theme() {
    setup();
    let html = render_provider(Theme::Light, true, true);

    assert!(html.contains(r#"class="dark""#), "{html}");
    assert!(html.contains(ToggleIcon::Sun.glyph()), "{html}");
}

#[test]
fn test_fixed_theme_hides_toggle() {
    let html = render_provider(Theme::Dark, false, true);

    assert!(html.contains(r#"class="dark""#), "{html}");
    assert!(!html.contains("<button"), "{html}");
}
