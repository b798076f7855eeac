use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Shared secret used when none is configured. Development only.
pub const DEMO_API_KEY: &str = "12345";

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Shared secret expected in the `x-api-key` header on write routes.
    /// This is a placeholder gate, not an authentication system.
    #[serde(default)]
    pub api_key: String,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level or full `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: "json" or "pretty"
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Load the four demo products at startup
    #[serde(default = "default_true")]
    pub seed_products: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            api_key: DEMO_API_KEY.to_string(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            seed_products: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server.*` config file and
    /// `CATALOG_SERVER__*` environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("CATALOG_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        // Reported by `start_server` once logging is up
        if config.api_key.is_empty() {
            config.api_key = DEMO_API_KEY.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("api_key must not be empty");
        }
        if self.port == 0 {
            anyhow::bail!("port must be non-zero");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        if self.max_body_size_mb == 0 {
            anyhow::bail!("max_body_size_mb must be at least 1");
        }
        if !matches!(self.log_format.as_str(), "json" | "pretty") {
            anyhow::bail!("log_format must be \"json\" or \"pretty\", got {:?}", self.log_format);
        }
        Ok(())
    }

    /// Whether writes are gated by the well-known demo key
    pub fn uses_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 4000);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size(), 1024 * 1024);
        assert_eq!(cfg.api_key, DEMO_API_KEY);
        assert!(cfg.enable_cors);
        assert!(cfg.seed_products);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = ServerConfig {
            api_key: String::new(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            log_format: "xml".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert!(cfg.api_key.is_empty());
        assert_eq!(cfg.log_format, "json");
    }

    #[test]
    fn test_uses_demo_key() {
        assert!(ServerConfig::default().uses_demo_key());

        let cfg = ServerConfig {
            api_key: "s3cret".into(),
            ..Default::default()
        };
        assert!(!cfg.uses_demo_key());
    }
}
