use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

pub use persistence::db::DatabaseConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Limit for JSON request bodies. Avatar uploads use `uploads.max_avatar_bytes`.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Where profile avatars are written and how they are served.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    /// Directory on disk receiving uploaded files.
    #[serde(default = "default_uploads_dir")]
    pub dir: String,

    /// URL prefix the directory is served under.
    #[serde(default = "default_uploads_public_path")]
    pub public_path: String,

    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: usize,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
            public_path: default_uploads_public_path(),
            max_avatar_bytes: default_max_avatar_bytes(),
        }
    }
}

/// Superadmin seeding.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Shared secret expected in the `X-Seed-Token` header.
    #[serde(default = "default_seed_token")]
    pub token: String,

    #[serde(default = "default_superadmin_email")]
    pub superadmin_email: String,

    #[serde(default = "default_superadmin_password")]
    pub superadmin_password: String,

    #[serde(default = "default_superadmin_name")]
    pub superadmin_name: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            token: default_seed_token(),
            superadmin_email: default_superadmin_email(),
            superadmin_password: default_superadmin_password(),
            superadmin_name: default_superadmin_name(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_max_body_size() -> usize {
    1_048_576
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_uploads_dir() -> String {
    "public/uploads".to_string()
}
fn default_uploads_public_path() -> String {
    "/uploads".to_string()
}
fn default_max_avatar_bytes() -> usize {
    5 * 1024 * 1024
}
fn default_seed_token() -> String {
    "dev-seed-token".to_string()
}
fn default_superadmin_email() -> String {
    "admin@psiclin.com".to_string()
}
fn default_superadmin_password() -> String {
    "Admin@123".to_string()
}
fn default_superadmin_name() -> String {
    "Super Admin".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with PSI__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("PSI")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("security.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds entirely from embedded defaults so tests do not depend on
    /// the working directory.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30
            max_body_size = 1048576

            [database]
            url = ""
            max_connections = 10
            min_connections = 1
            connect_timeout_secs = 10
            idle_timeout_secs = 600

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [uploads]
            dir = "public/uploads"
            public_path = "/uploads"
            max_avatar_bytes = 5242880

            [seed]
            token = "dev-seed-token"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        // Validation is left to the caller so partial configs load.
        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.database.url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "PSI__DATABASE__URL environment variable must be set".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigValidationError::InvalidValue(
                "min_connections cannot exceed max_connections".to_string(),
            ));
        }

        if self.seed.token.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "seed.token cannot be empty".to_string(),
            ));
        }

        let public_path = &self.uploads.public_path;
        if !public_path.starts_with('/') {
            return Err(ConfigValidationError::InvalidValue(
                "uploads.public_path must start with '/'".to_string(),
            ));
        }
        if public_path.trim_end_matches('/').is_empty() || public_path.contains(['*', ':']) {
            return Err(ConfigValidationError::InvalidValue(
                "uploads.public_path must be a fixed sub-path such as /uploads".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
