//! UI settings from the `[ui]` section of the workspace `config.toml`,
//! embedded at compile time.

use contracts::shared::config::UiConfig;
use once_cell::sync::Lazy;

const CONFIG_TOML: &str = include_str!("../../../../config.toml");

static UI_CONFIG: Lazy<UiConfig> = Lazy::new(|| match UiConfig::from_toml_str(CONFIG_TOML) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("{}; using default UI settings", e);
        UiConfig::default()
    }
});

pub fn ui_config() -> &'static UiConfig {
    &UI_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = UiConfig::from_toml_str(CONFIG_TOML).unwrap();
        assert!(!config.app_title.is_empty());
        assert!(config.recent_activity_limit > 0);
    }
}
