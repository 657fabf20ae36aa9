use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// `"*"` allows any origin.
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: default_origins() }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn is_production() -> bool {
    std::env::var("APP_ENV").map(|v| v.eq_ignore_ascii_case("production")).unwrap_or(false)
}

// Loopback for development, all interfaces in production.
fn default_host() -> String {
    if is_production() { "0.0.0.0".into() } else { "localhost".into() }
}
fn default_port() -> u16 { DEFAULT_PORT }
fn default_origins() -> Vec<String> { vec!["*".into()] }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults when the
    /// file is missing, then apply env overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) => match e.downcast_ref::<std::io::Error>() {
                Some(io) if io.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
                _ => return Err(e),
            },
        };
        cfg.server.apply_env_overrides()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.cors.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    /// `SERVER_HOST` / `SERVER_PORT` take precedence over the file.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(std::env::var("SERVER_HOST").ok(), std::env::var("SERVER_PORT").ok())
    }

    fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(raw) = port {
            self.port = raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("SERVER_PORT={raw:?} is not a valid port: {e}"))?;
        }
        Ok(())
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) => return Err(anyhow!("server.worker_threads must be >= 1")),
            Some(_) => {}
            None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CorsConfig {
    fn validate(&self) -> Result<()> {
        if self.allowed_origins.iter().all(|o| o.trim().is_empty()) {
            return Err(anyhow!("cors.allowed_origins must name at least one origin (or \"*\")"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert!(cfg.cors.allows_any_origin());
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn parses_all_sections() {
        let cfg = parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8088
            worker_threads = 2

            [cors]
            allowed_origins = ["http://localhost:3000"]

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:8088");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert!(!cfg.cors.allows_any_origin());
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn normalize_fills_blank_host_and_missing_workers() {
        let mut cfg = parse("[server]\nhost = \" \"\nport = 5000\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert!(!cfg.server.host.trim().is_empty());
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn rejects_zero_worker_threads() {
        let mut cfg = parse("[server]\nworker_threads = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn env_overrides_replace_host_and_port() {
        let mut server = ServerConfig::default();
        server.apply_overrides(Some("0.0.0.0".into()), Some("8088".into())).unwrap();
        assert_eq!(server.bind_addr(), "0.0.0.0:8088");
    }

    #[test]
    fn unparsable_port_override_is_an_error() {
        let mut server = ServerConfig::default();
        assert!(server.apply_overrides(None, Some("80a".into())).is_err());
        assert!(server.apply_overrides(None, Some("70000".into())).is_err());
        assert_eq!(server.port, 5000);
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_empty_origin_list() {
        let mut cfg = parse("[cors]\nallowed_origins = []\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        assert!(parse("[logging]\nformat = \"xml\"\n").is_err());
    }
}
