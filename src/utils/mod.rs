mod theme_state;
pub mod theme_storage;

pub use theme_state::{ Theme, ThemeState, ToggleIcon, ToggleView };
