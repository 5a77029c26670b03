use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    UnknownTheme(String),
    InvalidFlag {
        key: String,
        value: String,
    },
    Storage(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::UnknownTheme(value) => write!(f, "Unknown theme: {:?}", value),
            ThemeError::InvalidFlag { key, value } =>
                write!(f, "Invalid value for {}: {:?} (expected true/false)", key, value),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Storage(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ThemeError::UnknownTheme("sepia".into()).to_string(), "Unknown theme: \"sepia\"");
        assert_eq!(
            ThemeError::InvalidFlag {
                key: "ENTRY_UI_THEME_SWITCHABLE".into(),
                value: "maybe".into(),
            }.to_string(),
            "Invalid value for ENTRY_UI_THEME_SWITCHABLE: \"maybe\" (expected true/false)"
        );
        assert_eq!(ThemeError::Storage("denied".into()).to_string(), "Storage Error: denied");
    }
}
