mod theme_config;

pub use theme_config::{ ThemeConfig, THEME_KEY, SWITCHABLE_KEY };
