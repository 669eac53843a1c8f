use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 5000 }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let mut cfg: AppConfig = toml::from_str(&content)?;
    cfg.server.normalize()?;
    Ok(cfg)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "0.0.0.0".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_port_5000() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn parses_server_section() {
        let cfg: AppConfig = toml::from_str("[server]\nhost = \"127.0.0.1\"\nport = 8088\n")
            .expect("parse config");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8088);
    }

    #[test]
    fn missing_server_section_falls_back() {
        let cfg: AppConfig = toml::from_str("").expect("parse empty config");
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn blank_host_normalizes() {
        let mut sc = ServerConfig { host: "  ".into(), port: 5000 };
        sc.normalize().expect("normalize");
        assert_eq!(sc.host, "0.0.0.0");
    }

    #[test]
    fn zero_port_rejected() {
        let mut sc = ServerConfig { host: "0.0.0.0".into(), port: 0 };
        assert!(sc.normalize().is_err());
    }
}
