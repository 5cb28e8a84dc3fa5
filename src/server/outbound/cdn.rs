use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::server::{error::AppError, model::cloudflare::DevMode};

const CLOUDFLARE_API: &str = "https://api.cloudflare.com/client/v4";

#[async_trait]
pub trait CdnAdmin: Send + Sync {
    /// Drops every cached file in every configured zone.
    async fn purge_everything(&self) -> Result<(), AppError>;

    /// Turns development mode on or off in every configured zone.
    ///
    /// The CDN switches development mode off by itself three hours after it is
    /// turned on.
    async fn set_dev_mode(&self, mode: DevMode) -> Result<(), AppError>;
}

/// Envelope of every Cloudflare API answer.
#[derive(Debug, Deserialize)]
struct CloudflareResponse {
    success: bool,
    #[serde(default)]
    errors: Vec<CloudflareMessage>,
}

#[derive(Debug, Deserialize)]
struct CloudflareMessage {
    message: String,
}

pub struct CloudflareClient {
    http_client: reqwest::Client,
    api_token: String,
    zone_ids: Vec<String>,
}

impl CloudflareClient {
    pub fn new(http_client: reqwest::Client, api_token: String, zone_ids: Vec<String>) -> Self {
        Self {
            http_client,
            api_token,
            zone_ids,
        }
    }

    async fn check(response: reqwest::Response, zone: &str) -> Result<(), AppError> {
        let body: CloudflareResponse = response.json().await?;
        if body.success {
            return Ok(());
        }

        let reasons: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
        Err(AppError::Upstream(format!(
            "Cloudflare rejected request for zone {}: {}",
            zone,
            reasons.join("; ")
        )))
    }
}

#[async_trait]
impl CdnAdmin for CloudflareClient {
    async fn purge_everything(&self) -> Result<(), AppError> {
        for zone in &self.zone_ids {
            let response = self
                .http_client
                .post(format!("{CLOUDFLARE_API}/zones/{zone}/purge_cache"))
                .bearer_auth(&self.api_token)
                .json(&json!({ "purge_everything": true }))
                .send()
                .await?;

            Self::check(response, zone).await?;
        }

        tracing::info!("Purged CDN cache for {} zone(s)", self.zone_ids.len());
        Ok(())
    }

    async fn set_dev_mode(&self, mode: DevMode) -> Result<(), AppError> {
        for zone in &self.zone_ids {
            let response = self
                .http_client
                .patch(format!("{CLOUDFLARE_API}/zones/{zone}/settings/development_mode"))
                .bearer_auth(&self.api_token)
                .json(&json!({ "value": mode.to_string() }))
                .send()
                .await?;

            Self::check(response, zone).await?;
        }

        tracing::info!("Set CDN development mode {} for {} zone(s)", mode, self.zone_ids.len());
        Ok(())
    }
}
