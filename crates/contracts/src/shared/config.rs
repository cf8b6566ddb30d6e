//! Dashboard settings read from the `[ui]` section of `config.toml`.
//!
//! The frontend embeds the workspace `config.toml` at compile time; the
//! backend reads the `[server]` section of the same file at runtime.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub app_title: String,
    pub organization: String,
    /// Theme name; unknown names fall back to the default theme.
    pub theme: String,
    /// One-shot simulated loading delay of the overview dashboard.
    pub overview_load_delay_ms: u32,
    /// Rows in the overview's recent activity widget.
    pub recent_activity_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_title: "Security Consulting Dashboard".to_string(),
            organization: "Campus Cyber Clinic".to_string(),
            theme: "light".to_string(),
            overview_load_delay_ms: 600,
            recent_activity_limit: 5,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiConfig,
}

impl UiConfig {
    /// Parses a whole `config.toml`; other sections are ignored and missing
    /// keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_ui_section_keeps_other_defaults() {
        let config = UiConfig::from_toml_str(
            r#"
[server]
addr = "0.0.0.0:8080"

[ui]
theme = "dark"
overview_load_delay_ms = 0
"#,
        )
        .unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.overview_load_delay_ms, 0);
        assert_eq!(config.recent_activity_limit, 5);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = UiConfig::from_toml_str("[ui]\noverview_load_delay_ms = \"soon\"").unwrap_err();
        assert!(err.to_string().starts_with("invalid config.toml"));
    }
}
