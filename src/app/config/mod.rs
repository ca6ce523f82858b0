//! Application configuration loading and validation.
//!
//! Non-secret settings come from an optional TOML file with
//! `#[serde(default)]` sections. Secrets and the admin allowlist come only
//! from the environment: `BOT_TOKEN`, `OPENAI_API_KEY` (read at client
//! construction), and `ADMIN_IDS`.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Network, UserId};
use crate::error::{ConfigError, Result};

mod llm;
mod logging;

pub use llm::{LlmConfig, OpenAiConfig};
pub use logging::LoggingConfig;

/// Telegram settings, environment-sourced.
#[derive(Debug, Default, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Fixed admin allowlist, immutable for process lifetime.
    pub admins: HashSet<UserId>,
}

/// Token discovery defaults applied when `/newtokens` arguments are
/// omitted or unparseable.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_chain")]
    pub default_chain: String,
    #[serde(default = "default_hours")]
    pub default_hours: i64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            default_chain: default_chain(),
            default_hours: default_hours(),
        }
    }
}

fn default_chain() -> String {
    "ethereum".into()
}

const fn default_hours() -> i64 {
    6
}

/// Webhook transport settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

const fn default_port() -> u16 {
    3000
}

impl WebhookConfig {
    /// Bind address for the webhook server.
    ///
    /// # Errors
    ///
    /// Returns a config error when host/port do not form a valid socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|_| {
            ConfigError::InvalidValue {
                field: "webhook.host",
                reason: format!("`{}:{}` is not a socket address", self.host, self.port),
            }
            .into()
        })
    }
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Environment-sourced; never read from the config file.
    #[serde(skip)]
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load configuration from an optional TOML file plus the environment.
    ///
    /// A missing file falls back to defaults; a present but invalid file is
    /// a hard error.
    ///
    /// # Errors
    ///
    /// Returns a config error for unreadable/unparseable files, a missing
    /// `BOT_TOKEN`, or invalid settings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        } else {
            Self::default()
        };

        config.telegram.bot_token = std::env::var("BOT_TOKEN")
            .map_err(|_| ConfigError::MissingField { field: "BOT_TOKEN" })?;
        config.telegram.admins = parse_admin_ids(&std::env::var("ADMIN_IDS").unwrap_or_default());

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.llm.openai.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.openai.max_tokens",
                reason: "must be greater than zero".into(),
            }
            .into());
        }

        if self.discovery.default_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "discovery.default_hours",
                reason: "must be a positive number of hours".into(),
            }
            .into());
        }

        Network::resolve(&self.discovery.default_chain).map_err(|_| {
            ConfigError::InvalidValue {
                field: "discovery.default_chain",
                reason: format!("`{}` is not a supported chain", self.discovery.default_chain),
            }
        })?;

        self.webhook.bind_addr()?;

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// Parse the comma-separated admin allowlist: entries trimmed, empties
/// dropped.
#[must_use]
pub fn parse_admin_ids(raw: &str) -> HashSet<UserId> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(UserId::from)
        .collect()
}
