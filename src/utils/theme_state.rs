use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use dioxus::prelude::EventHandler;
use serde::{ Deserialize, Serialize };
use crate::error::ThemeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Theme as seen by the toggle: the current value, whether it may change,
/// and the action that changes it.
#[derive(Clone, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
    pub switchable: bool,
    pub toggle_theme: Option<EventHandler<()>>,
}

impl ThemeState {
    pub fn view(&self) -> ToggleView {
        ToggleView::resolve(self.theme, self.switchable, self.toggle_theme.is_some())
    }

    /// Fires the toggle action if the control is visible. Returns whether it fired.
    pub fn activate(&self) -> bool {
        match (self.view(), &self.toggle_theme) {
            (ToggleView::Visible { .. }, Some(toggle)) => {
                toggle.call(());
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "🌞",
            ToggleIcon::Moon => "🌙",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "Switch to light theme",
            ToggleIcon::Moon => "Switch to dark theme",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleView {
    Hidden,
    Visible {
        icon: ToggleIcon,
    },
}

impl ToggleView {
    pub fn resolve(theme: Theme, switchable: bool, has_toggle: bool) -> Self {
        if !switchable || !has_toggle {
            return ToggleView::Hidden;
        }
        let icon = if theme.is_dark() { ToggleIcon::Sun } else { ToggleIcon::Moon };
        ToggleView::Visible { icon }
    }
}
