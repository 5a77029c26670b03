use dioxus::prelude::*;
use log::info;
use crate::configs::ThemeConfig;
use crate::utils::{ theme_storage, Theme, ThemeState };

/// Shared handle to the app's theme, placed in context by [`ThemeProvider`].
#[derive(Clone)]
pub struct ThemeHandle {
    pub theme: Signal<Theme>,
    pub switchable: bool,
    pub toggle: Option<EventHandler<()>>,
}

impl ThemeHandle {
    /// Snapshot for passing to [`crate::components::ThemeToggle`]. Reading it
    /// subscribes the caller to theme changes.
    pub fn state(&self) -> ThemeState {
        ThemeState {
            theme: *self.theme.read(),
            switchable: self.switchable,
            toggle_theme: self.toggle,
        }
    }
}

pub fn use_theme_state() -> ThemeState {
    use_context::<ThemeHandle>().state()
}

#[component]
pub fn ThemeProvider(config: ThemeConfig, children: Element) -> Element {
    let mut theme = use_signal(|| theme_storage::load_initial(&config));
    let switchable = config.switchable;

    use_context_provider(|| {
        let toggle = switchable.then(|| {
            EventHandler::new(move |_| {
                let current = *theme.peek();
                let next = current.toggled();
                info!("Theme changed: {} -> {}", current, next);
                theme.set(next);
                theme_storage::apply(next);
                theme_storage::save(next);
            })
        });
        ThemeHandle { theme, switchable, toggle }
    });

    use_hook(move || theme_storage::apply(*theme.peek()));

    rsx! {
        div {
            class: if theme().is_dark() { "dark" } else { "" },
            {children}
        }
    }
}
