use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAIL_SENDER: &str = "contact@faithfulpack.net";

pub struct Config {
    pub database_url: String,
    /// Public base URL, used in verification links.
    pub app_url: String,
    pub bind_addr: SocketAddr,

    pub mail_sender: String,
    /// Relay endpoint for outgoing mail. Without it mail is only logged.
    pub mail_relay_url: Option<String>,
    pub mail_relay_key: Option<String>,

    pub curseforge_api_key: String,

    pub cloudflare_api_token: String,
    pub cloudflare_zone_ids: Vec<String>,
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn checked_url(name: &str, value: String) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(value.trim_end_matches('/').to_string())
}

/// Splits a comma separated list, dropping blank entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let mail_relay_url = optional("MAIL_RELAY_URL")
            .map(|url| checked_url("MAIL_RELAY_URL", url))
            .transpose()?;

        let cloudflare_zone_ids = split_list(&required("CLOUDFLARE_ZONE_IDS")?);
        if cloudflare_zone_ids.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "CLOUDFLARE_ZONE_IDS".to_string(),
                reason: "at least one zone id is required".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: checked_url("APP_URL", required("APP_URL")?)?,
            bind_addr,
            mail_sender: optional("MAIL_SENDER").unwrap_or_else(|| DEFAULT_MAIL_SENDER.to_string()),
            mail_relay_url,
            mail_relay_key: optional("MAIL_RELAY_KEY"),
            curseforge_api_key: required("CURSEFORGE_API_KEY")?,
            cloudflare_api_token: required("CLOUDFLARE_API_TOKEN")?,
            cloudflare_zone_ids,
        })
    }
}
