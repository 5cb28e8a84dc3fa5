use async_trait::async_trait;
use serde::Serialize;

use crate::server::error::AppError;

/// A plain-text email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mail {
    pub from: String,
    pub to: String,
    pub subject: String,
    #[serde(rename = "text")]
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends `mail`, failing with `AppError::Upstream` when delivery is refused.
    async fn send(&self, mail: &Mail) -> Result<(), AppError>;
}

/// Sends mail through an HTTP relay that accepts `{from, to, subject, text}` JSON.
pub struct HttpMailer {
    http_client: reqwest::Client,
    relay_url: String,
    relay_key: Option<String>,
}

impl HttpMailer {
    pub fn new(http_client: reqwest::Client, relay_url: String, relay_key: Option<String>) -> Self {
        Self {
            http_client,
            relay_url,
            relay_key,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: &Mail) -> Result<(), AppError> {
        let mut request = self.http_client.post(&self.relay_url).json(mail);
        if let Some(key) = &self.relay_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Mail relay refused message to {}: {}",
                mail.to,
                response.status()
            )));
        }

        tracing::debug!("Sent \"{}\" to {}", mail.subject, mail.to);
        Ok(())
    }
}

/// Logs mail instead of sending it. Used when no relay is configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: &Mail) -> Result<(), AppError> {
        tracing::info!(
            "No mail relay configured, not sending \"{}\" to {}:\n{}",
            mail.subject,
            mail.to,
            mail.body
        );
        Ok(())
    }
}
