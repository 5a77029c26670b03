mod theme_provider;
mod theme_toggle;
mod welcome_screen;

pub use theme_provider::{ use_theme_state, ThemeHandle, ThemeProvider };
pub use theme_toggle::{ ThemeToggle, TOGGLE_LABEL };
pub use welcome_screen::{ WelcomeChoice, WelcomeScreen, WELCOME_SUBTITLE, WELCOME_TITLE };
