//! Browser-side persistence of the theme preference.
//!
//! On `wasm32` the preference lives in `localStorage` and the `<html>` element
//! carries a `dark` class while the dark theme is active. Other targets have no
//! document to style, so loading yields nothing and writes are no-ops.

use log::{ debug, warn };
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use super::Theme;

pub const STORAGE_KEY: &str = "entry_ui_theme";

pub fn encode(theme: Theme) -> Result<String, ThemeError> {
    Ok(serde_json::to_string(&theme)?)
}

pub fn decode(raw: &str) -> Result<Theme, ThemeError> {
    serde_json::from_str(raw).map_err(|_| ThemeError::UnknownTheme(raw.to_string()))
}

/// Picks the theme to start with. A stored preference wins, then the system
/// dark-mode preference, then the configured default. Stored and system
/// preferences are ignored when the theme cannot be switched.
pub fn initial_theme(config: &ThemeConfig, stored: Option<Theme>, prefers_dark: bool) -> Theme {
    if !config.switchable {
        return config.default_theme;
    }
    stored
        .or(prefers_dark.then_some(Theme::Dark))
        .unwrap_or(config.default_theme)
}

/// Reads the stored preference and system preference, then picks the start theme.
pub fn load_initial(config: &ThemeConfig) -> Theme {
    let stored = load().unwrap_or_else(|e| {
        warn!("Ignoring stored theme preference: {}", e);
        None
    });
    let theme = initial_theme(config, stored, prefers_dark());
    debug!("Initial theme: {} (stored: {:?})", theme, stored);
    theme
}

pub fn load() -> Result<Option<Theme>, ThemeError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = match local_storage()? {
            Some(storage) => storage,
            None => {
                return Ok(None);
            }
        };
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

pub fn save(theme: Theme) {
    if let Err(e) = try_save(theme) {
        warn!("Failed to persist theme preference: {}", e);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn try_save(theme: Theme) -> Result<(), ThemeError> {
    #[cfg(target_arch = "wasm32")]
    {
        let value = encode(theme)?;
        if let Some(storage) = local_storage()? {
            storage
                .set_item(STORAGE_KEY, &value)
                .map_err(|e| ThemeError::Storage(format!("{:?}", e)))?;
        }
    }
    Ok(())
}

/// Mirrors the theme onto the document root so page-level CSS can follow it.
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(el) => {
                if let Err(e) = el.class_list().toggle_with_force("dark", theme.is_dark()) {
                    warn!("Failed to apply theme class: {:?}", e);
                }
            }
            None => warn!("No document element to apply theme to"),
        }
    }
}

fn prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<Option<web_sys::Storage>, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Storage("no window".to_string()))?;
    window.local_storage().map_err(|e| ThemeError::Storage(format!("{:?}", e)))
}
