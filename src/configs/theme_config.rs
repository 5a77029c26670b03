use log::{ info, warn };
use crate::error::ThemeError;
use crate::utils::Theme;

pub const THEME_KEY: &str = "ENTRY_UI_THEME";
pub const SWITCHABLE_KEY: &str = "ENTRY_UI_THEME_SWITCHABLE";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeConfig {
    pub default_theme: Theme,
    pub switchable: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            switchable: true,
        }
    }
}

impl ThemeConfig {
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        info!(
            "Theme config: default={} switchable={}",
            config.default_theme,
            config.switchable
        );
        config
    }

    /// Builds a config, replacing any unparseable value with its default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_theme = parse_key(&lookup, THEME_KEY, |v| v.parse::<Theme>()).unwrap_or_else(
            |e| {
                warn!("{}, using {}", e, defaults.default_theme);
                None
            }
        );
        let switchable = parse_key(&lookup, SWITCHABLE_KEY, |v| parse_flag(SWITCHABLE_KEY, v)).unwrap_or_else(
            |e| {
                warn!("{}, using {}", e, defaults.switchable);
                None
            }
        );

        Self {
            default_theme: default_theme.unwrap_or(defaults.default_theme),
            switchable: switchable.unwrap_or(defaults.switchable),
        }
    }

    pub fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ThemeError> {
        let defaults = Self::default();
        let default_theme = parse_key(&lookup, THEME_KEY, |v| v.parse::<Theme>())?;
        let switchable = parse_key(&lookup, SWITCHABLE_KEY, |v| parse_flag(SWITCHABLE_KEY, v))?;

        Ok(Self {
            default_theme: default_theme.unwrap_or(defaults.default_theme),
            switchable: switchable.unwrap_or(defaults.switchable),
        })
    }
}

fn parse_key<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Result<T, ThemeError>
) -> Result<Option<T>, ThemeError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => parse(&value).map(Some),
        _ => Ok(None),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ThemeError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ =>
            Err(ThemeError::InvalidFlag {
                key: key.to_string(),
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ThemeConfig::from_lookup(lookup(&[])), ThemeConfig::default());
    }

    #[test]
    fn test_reads_both_keys() {
        let config = ThemeConfig::from_lookup(lookup(&[(THEME_KEY, "Dark"), (SWITCHABLE_KEY, "off")]));
        assert_eq!(config.default_theme, Theme::Dark);
        assert!(!config.switchable);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ThemeConfig::from_lookup(lookup(&[(THEME_KEY, "sepia"), (SWITCHABLE_KEY, "maybe")]));
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_try_from_lookup_reports_errors() {
        let err = ThemeConfig::try_from_lookup(lookup(&[(SWITCHABLE_KEY, "maybe")])).unwrap_err();
        assert_eq!(err, ThemeError::InvalidFlag {
            key: SWITCHABLE_KEY.to_string(),
            value: "maybe".to_string(),
        });
        assert!(
            matches!(
                ThemeConfig::try_from_lookup(lookup(&[(THEME_KEY, "sepia")])),
                Err(ThemeError::UnknownTheme(_))
            )
        );
    }

    #[test]
    fn test_flag_spellings() {
        for v in ["true", "1", "YES", " on "] {
            assert_eq!(parse_flag(SWITCHABLE_KEY, v), Ok(true));
        }
        for v in ["false", "0", "No", "OFF"] {
            assert_eq!(parse_flag(SWITCHABLE_KEY, v), Ok(false));
        }
    }
}
