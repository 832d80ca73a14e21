use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Pre-compiled regex for hostname validation (compiled once at first use)
static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([-a-zA-Z0-9\.]*[a-zA-Z0-9])?$").expect("valid hostname regex")
});

/// Pre-compiled regex for the API root: one or more `/segment` parts.
static API_ROOT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/[A-Za-z0-9._~-]+)+$").expect("valid api root regex"));

#[derive(Debug, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub database: Option<DatabaseSection>,
    #[serde(default)]
    pub server: Option<ServerSection>,
    #[serde(default)]
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub json: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub api_root: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSection {
    pub driver: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub ssl_mode: Option<String>,
    #[serde(default)]
    pub max_connections: Option<u32>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Load a RawConfigFile from a path. The format is inferred from the extension: .toml, .yaml/.yml, .json
pub fn load_raw_from_file<P: AsRef<Path>>(path: P) -> Result<RawConfigFile, ConfigError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    parse_config_str(&s, ext.as_deref())
}

#[inline]
fn parse_config_str(s: &str, ext: Option<&str>) -> Result<RawConfigFile, ConfigError> {
    match ext {
        #[cfg(feature = "toml")]
        Some("toml") => toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string())),
        #[cfg(feature = "yaml")]
        Some("yaml" | "yml") => {
            serde_yaml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
        }
        #[cfg(feature = "json")]
        Some("json") => serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string())),
        _ => parse_config_auto(s),
    }
}

/// Try to parse config by attempting each enabled format
#[inline]
fn parse_config_auto(s: &str) -> Result<RawConfigFile, ConfigError> {
    #[cfg(feature = "json")]
    if let Ok(cfg) = serde_json::from_str(s) {
        return Ok(cfg);
    }

    #[cfg(feature = "toml")]
    if let Ok(cfg) = toml::from_str(s) {
        return Ok(cfg);
    }

    #[cfg(feature = "yaml")]
    if let Ok(cfg) = serde_yaml::from_str(s) {
        return Ok(cfg);
    }

    #[cfg(any(feature = "yaml", feature = "toml", feature = "json"))]
    {
        Err(ConfigError::Parse(
            "failed to parse config as any supported format".into(),
        ))
    }

    #[cfg(not(any(feature = "yaml", feature = "toml", feature = "json")))]
    {
        let _ = s;
        Err(ConfigError::Parse("no config format enabled".into()))
    }
}

/// Concrete application configuration with defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix under which the job routes are mounted, e.g. `/career`.
    pub api_root: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseConfig {
    pub driver: String,
    pub path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub ssl_mode: Option<String>,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 6000,
                api_root: "/career".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
            },
            database: DatabaseConfig {
                driver: "sqlite".to_string(),
                path: Some("careers.sqlite".to_string()),
                host: None,
                port: None,
                database: None,
                username: None,
                password: None,
                ssl_mode: None,
                max_connections: 10,
            },
        }
    }
}

impl DatabaseConfig {
    /// Resolve the connection url for the configured driver.
    ///
    /// SQLite uses `path` verbatim. For Postgres and MySQL an explicit `path`
    /// containing `://` wins; otherwise the url is assembled from host, port,
    /// database, credentials and `ssl_mode`.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if self.driver == "sqlite" {
            return self
                .path
                .clone()
                .filter(|p| !p.trim().is_empty())
                .ok_or_else(|| {
                    ConfigError::Validation("database.path must be set for sqlite".into())
                });
        }

        if let Some(path) = self.path.as_deref().filter(|p| p.contains("://")) {
            return Ok(path.to_string());
        }

        let host = self
            .host
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                ConfigError::Validation("database.host must be set for non-sqlite drivers".into())
            })?;
        let mut url = url::Url::parse(&format!("{}://{}", self.driver, host))
            .map_err(|e| ConfigError::Validation(format!("invalid database.host: {e}")))?;

        if let Some(port) = self.port {
            url.set_port(Some(port))
                .map_err(|_| ConfigError::Validation("invalid database.port".into()))?;
        }
        if let Some(user) = self.username.as_deref().filter(|u| !u.is_empty()) {
            url.set_username(user)
                .map_err(|_| ConfigError::Validation("invalid database.username".into()))?;
            if let Some(password) = self.password.as_deref() {
                url.set_password(Some(password))
                    .map_err(|_| ConfigError::Validation("invalid database.password".into()))?;
            }
        }
        if let Some(db) = self.database.as_deref() {
            url.set_path(db);
        }
        if let Some(mode) = self.ssl_mode.as_deref() {
            let key = if self.driver == "mysql" {
                "ssl-mode"
            } else {
                "sslmode"
            };
            url.query_pairs_mut().append_pair(key, mode);
        }
        Ok(url.to_string())
    }
}

#[inline]
fn parse_bool(s: &str) -> Result<bool, ()> {
    match s.as_bytes() {
        b"1" | b"true" | b"TRUE" | b"True" | b"yes" | b"YES" | b"Yes" | b"y" | b"Y" => Ok(true),
        b"0" | b"false" | b"FALSE" | b"False" | b"no" | b"NO" | b"No" | b"n" | b"N" => Ok(false),
        _ => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" => Ok(true),
            "false" | "no" | "n" => Ok(false),
            _ => Err(()),
        },
    }
}

/// Helper macro to apply optional value if present
macro_rules! apply_opt {
    ($target:expr, $source:expr) => {
        if let Some(v) = $source {
            $target = v;
        }
    };
}

/// Helper macro to apply option field directly if it has a value
macro_rules! apply_opt_field {
    ($target:expr, $source:expr) => {
        if $source.is_some() {
            $target = $source;
        }
    };
}

/// Load concrete `Config` from optional file and environment variables.
/// Environment variables take precedence over file values and defaults.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if let Some(p) = path {
        let raw = load_raw_from_file(p)?;
        if let Some(server) = raw.server {
            apply_opt!(cfg.server.host, server.host);
            apply_opt!(cfg.server.port, server.port);
            apply_opt!(cfg.server.api_root, server.api_root);
        }
        if let Some(logging) = raw.logging {
            apply_opt!(cfg.logging.level, logging.level);
            apply_opt!(cfg.logging.json, logging.json);
        }
        if let Some(db) = raw.database {
            cfg.database.driver = db.driver;
            apply_opt_field!(cfg.database.path, db.path);
            apply_opt_field!(cfg.database.host, db.host);
            apply_opt_field!(cfg.database.port, db.port);
            apply_opt_field!(cfg.database.database, db.database);
            apply_opt_field!(cfg.database.username, db.username);
            apply_opt_field!(cfg.database.password, db.password);
            apply_opt_field!(cfg.database.ssl_mode, db.ssl_mode);
            apply_opt!(cfg.database.max_connections, db.max_connections);
        }
    }

    apply_env_overrides(&mut cfg)?;

    Ok(cfg)
}

#[inline]
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("invalid {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}

#[inline]
fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(v) => parse_bool(&v)
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("invalid {}", key))),
        Err(_) => Ok(None),
    }
}

#[inline]
fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn apply_env_overrides(cfg: &mut Config) -> Result<(), ConfigError> {
    // Server
    if let Some(v) = env_str("CAREERS_SERVER_HOST") {
        cfg.server.host = v;
    }
    if let Some(v) = env_parse::<u16>("CAREERS_SERVER_PORT")? {
        cfg.server.port = v;
    }
    if let Some(v) = env_str("CAREERS_SERVER_API_ROOT") {
        cfg.server.api_root = v;
    }

    // Logging
    if let Some(v) = env_str("CAREERS_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = env_bool("CAREERS_LOG_JSON")? {
        cfg.logging.json = v;
    }

    // Database
    if let Some(v) = env_str("CAREERS_DATABASE_DRIVER") {
        cfg.database.driver = v;
    }
    if let Some(v) = env_str("CAREERS_DATABASE_PATH") {
        cfg.database.path = Some(v);
    }
    if let Some(v) = env_str("CAREERS_DATABASE_HOST") {
        cfg.database.host = Some(v);
    }
    if let Some(v) = env_parse::<u16>("CAREERS_DATABASE_PORT")? {
        cfg.database.port = Some(v);
    }
    if let Some(v) = env_str("CAREERS_DATABASE_NAME") {
        cfg.database.database = Some(v);
    }
    if let Some(v) = env_str("CAREERS_DATABASE_USERNAME") {
        cfg.database.username = Some(v);
    }
    if let Some(v) = env_str("CAREERS_DATABASE_PASSWORD") {
        cfg.database.password = Some(v);
    }
    if let Some(v) = env_str("CAREERS_DATABASE_SSL_MODE") {
        cfg.database.ssl_mode = Some(v);
    }
    if let Some(v) = env_parse::<u32>("CAREERS_DATABASE_MAX_CONNECTIONS")? {
        cfg.database.max_connections = v;
    }
    // Full url alias
    if let Some(v) = env_str("CAREERS_DATABASE_URL") {
        cfg.database.path = Some(v);
    }

    Ok(())
}

/// Validate higher-level constraints on the resolved configuration.
pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.server.port == 0 {
        return Err(ConfigError::Validation("server.port must be > 0".into()));
    }
    let host_ok = cfg.server.host.parse::<std::net::IpAddr>().is_ok()
        || HOSTNAME_REGEX.is_match(&cfg.server.host);
    if !host_ok {
        return Err(ConfigError::Validation(format!(
            "invalid server.host: {}",
            cfg.server.host
        )));
    }
    if !API_ROOT_REGEX.is_match(&cfg.server.api_root) {
        return Err(ConfigError::Validation(format!(
            "server.api_root must look like /segment[/segment..]: {}",
            cfg.server.api_root
        )));
    }

    match cfg.database.driver.as_str() {
        "sqlite" | "postgres" | "mysql" => {}
        other => {
            return Err(ConfigError::Validation(format!(
                "unsupported database driver: {}",
                other
            )))
        }
    }
    if cfg.database.max_connections == 0 {
        return Err(ConfigError::Validation(
            "database.max_connections must be > 0".into(),
        ));
    }
    // non-sqlite must have host and database unless a full url was given
    let has_url = cfg
        .database
        .path
        .as_deref()
        .map(|p| p.contains("://"))
        .unwrap_or(false);
    if cfg.database.driver != "sqlite" && !has_url {
        if cfg
            .database
            .host
            .as_deref()
            .map(|s| s.is_empty())
            .unwrap_or(true)
        {
            return Err(ConfigError::Validation(
                "database.host must be set for non-sqlite drivers".to_string(),
            ));
        }
        if cfg
            .database
            .database
            .as_deref()
            .map(|s| s.is_empty())
            .unwrap_or(true)
        {
            return Err(ConfigError::Validation(
                "database.database must be set for non-sqlite drivers".to_string(),
            ));
        }
    }
    Ok(())
}
