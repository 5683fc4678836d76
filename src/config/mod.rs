use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    /// Byline stamped on every new blog post.
    #[serde(default = "default_author")]
    pub author: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Allowed CORS origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            author: default_author(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            pool_size: default_pool_size(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_site_title() -> String {
    "Kelvin Ndoma".to_string()
}

fn default_author() -> String {
    "Kelvin Ndoma".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_db_path() -> String {
    "./data/folio.db".to_string()
}

fn default_pool_size() -> u32 {
    10
}

fn default_page_size() -> u32 {
    10
}

fn default_max_page_size() -> u32 {
    100
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run 'folio init' to create one.",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        if self.api.default_page_size == 0 {
            anyhow::bail!("api.default_page_size must be greater than 0");
        }
        if self.api.max_page_size < self.api.default_page_size {
            anyhow::bail!("api.max_page_size must be at least api.default_page_size");
        }
        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("server.request_timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.author, "Kelvin Ndoma");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.api.default_page_size, 10);
        assert_eq!(config.api.max_page_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [site]
            author = "Jane Doe"

            [api]
            max_page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.site.author, "Jane Doe");
        assert_eq!(config.site.title, "Kelvin Ndoma");
        assert_eq!(config.api.max_page_size, 50);
        assert_eq!(config.api.default_page_size, 10);
    }

    #[test]
    fn test_validate_rejects_bad_page_sizes() {
        let mut config = Config::default();
        config.api.default_page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api.default_page_size = 20;
        config.api.max_page_size = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_pool() {
        let mut config = Config::default();
        config.database.pool_size = 0;
        assert!(config.validate().is_err());
    }
}
