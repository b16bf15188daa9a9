use contracts::shared::format::DisplaySettings;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use super::error::AppError;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (trunk output)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Number formatting handed to the frontend
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub decimals: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let settings = DisplaySettings::default();
        Self {
            thousands_separator: settings.thousands_separator,
            decimal_separator: settings.decimal_separator,
            decimals: settings.decimals,
        }
    }
}

impl From<&DisplayConfig> for DisplaySettings {
    fn from(display: &DisplayConfig) -> Self {
        DisplaySettings {
            thousands_separator: display.thousands_separator.clone(),
            decimal_separator: display.decimal_separator.clone(),
            decimals: display.decimals,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| AppError::Config(format!("invalid host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[display]
thousands_separator = ","
decimal_separator = "."
decimals = 2
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Stores the loaded configuration for handlers
pub fn init_config(config: Config) -> Result<&'static Config, AppError> {
    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("configuration already initialized".to_string()))?;
    CONFIG
        .get()
        .ok_or_else(|| AppError::Config("configuration missing after init".to_string()))
}

/// Display settings from the loaded config, or the defaults before init
pub fn display_settings() -> DisplaySettings {
    CONFIG
        .get()
        .map(|config| DisplaySettings::from(&config.display))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(DisplaySettings::from(&config.display), DisplaySettings::default());
    }

    #[test]
    fn test_display_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.display.decimals, 2);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_partial_display_section() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [display]
            thousands_separator = "."
            decimal_separator = ","
            "#,
        )
        .unwrap();
        let settings = DisplaySettings::from(&config.display);
        assert_eq!(settings.thousands_separator, ".");
        assert_eq!(settings.decimal_separator, ",");
        assert_eq!(settings.decimals, 2);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let server = ServerConfig {
            host: "not-an-ip".to_string(),
            port: 3000,
            static_dir: default_static_dir(),
        };
        assert!(matches!(server.socket_addr(), Err(AppError::Config(_))));
    }
}
