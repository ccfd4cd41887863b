use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Собранный фронтенд (index.html + wasm)
    pub static_dir: String,
    /// Каталог с документами категорий
    pub data_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
static_dir = "dist"
data_dir = "public/db"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {addr}: {e}"))
    }

    pub fn static_dir(&self) -> PathBuf {
        resolve_dir(&self.site.static_dir)
    }

    pub fn data_dir(&self) -> PathBuf {
        resolve_dir(&self.site.data_dir)
    }
}

/// Relative paths are resolved against the working directory
fn resolve_dir(path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(p))
        .unwrap_or_else(|_| p.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.static_dir, "dist");
        assert_eq!(config.site.data_dir, "public/db");
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_host_defaults_when_missing() {
        let config = parse_config(
            r#"
            [server]
            port = 8081

            [site]
            static_dir = "/srv/site"
            data_dir = "db"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.static_dir(), PathBuf::from("/srv/site"));
        assert!(config.data_dir().ends_with("db"));
        assert!(config.data_dir().is_absolute());
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".into();
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nport = 1").is_err());
    }
}
