//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, YAML file, `APP__*`
//! environment variables (`__` separates nesting levels), CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use lead_intake::config::{LeadIntakeConfig, string_from_scalar};
use serde::{Deserialize, Serialize};
use url::Url;

pub const ENV_PREFIX: &str = "APP__";
pub const MOCK_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub lead_intake: LeadIntakeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    /// Site origins allowed to post the form cross-origin. Empty means
    /// same-origin only.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8087)),
            body_limit_bytes: 64 * 1024,
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `lead_intake=debug,info`.
    #[serde(deserialize_with = "string_from_scalar")]
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(deserialize_with = "string_from_scalar")]
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://lead_intake.db?mode=rwc".to_owned(),
        }
    }
}

impl DatabaseConfig {
    /// DSN with any password replaced, safe for logs and config dumps.
    #[must_use]
    pub fn redacted_dsn(&self) -> String {
        match Url::parse(&self.dsn) {
            Ok(mut url) if url.password().is_some() => {
                // Only fails for cannot-be-a-base URLs, which carry no password.
                let _ = url.set_password(Some("***"));
                url.to_string()
            }
            _ => self.dsn.clone(),
        }
    }
}

/// Values taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub mock: bool,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `APP__*` variables.
    ///
    /// # Errors
    /// Fails when a layer cannot be read or the merged result does not match
    /// the schema (unknown keys included).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr.set_port(port);
        }
        if cli.mock {
            MOCK_DSN.clone_into(&mut self.database.dsn);
        }
        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// Pretty JSON dump with secrets redacted.
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn to_redacted_json(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.database.dsn = self.database.redacted_dsn();
        serde_json::to_string_pretty(&shown).context("failed to serialize configuration")
    }
}
