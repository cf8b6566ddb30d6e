use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, `host:port`.
    pub addr: String,
    /// Directory with the built frontend bundle.
    pub static_dir: String,
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            static_dir: "dist".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
addr = "127.0.0.1:3000"
static_dir = "dist"
log_filter = "info,tower_http=warn"
"#;

/// Where the configuration came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

/// Path of `config.toml` next to the executable, if it exists.
pub fn locate_config() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    config_path.exists().then_some(config_path)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
///
/// Runs before tracing is initialised, so the source is returned instead
/// of being logged here.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    match locate_config() {
        Some(path) => {
            let config = load_config_from(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        None => Ok((toml::from_str(DEFAULT_CONFIG)?, ConfigSource::Embedded)),
    }
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Resolves the static directory relative to the executable directory
/// unless it is absolute.
pub fn resolve_static_dir(config: &ServerConfig) -> PathBuf {
    let dir = Path::new(&config.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }
    // cargo run from the workspace root
    PathBuf::from(&config.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:3000");
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_ui_section_is_ignored() {
        let config: Config = toml::from_str(
            r#"
[server]
addr = "0.0.0.0:8080"

[ui]
app_title = "Clinic"
"#,
        )
        .unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.server.log_filter, "info");
    }

    #[test]
    fn test_missing_server_section_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.addr, ServerConfig::default().addr);
    }

    #[test]
    fn test_workspace_config_parses() {
        let config: Config = toml::from_str(include_str!("../../../../config.toml")).unwrap();
        assert!(!config.server.addr.is_empty());
    }

    #[test]
    fn test_absolute_static_dir_kept() {
        let abs = std::env::temp_dir().join("dist");
        let server = ServerConfig {
            static_dir: abs.to_string_lossy().into_owned(),
            ..Default::default()
        };
        assert_eq!(resolve_static_dir(&server), abs);
    }
}
