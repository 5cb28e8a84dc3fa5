use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::{
        cloudflare::DevMode,
        permission::{can_administer_cdn, Principal},
    },
    outbound::CdnAdmin,
};

pub struct CloudflareService {
    cdn: Arc<dyn CdnAdmin>,
}

impl CloudflareService {
    pub fn new(cdn: Arc<dyn CdnAdmin>) -> Self {
        Self { cdn }
    }

    fn authorize(principal: &Principal) -> Result<(), AppError> {
        if !can_administer_cdn(principal) {
            return Err(AppError::Permission(
                "Administrator or Developer role required".to_string(),
            ));
        }
        Ok(())
    }

    /// Purges the whole CDN cache.
    pub async fn purge(&self, principal: &Principal) -> Result<(), AppError> {
        Self::authorize(principal)?;
        tracing::info!("User {} requested a CDN purge", principal.user_id);

        self.cdn.purge_everything().await
    }

    /// Switches CDN development mode.
    pub async fn dev(&self, principal: &Principal, mode: DevMode) -> Result<(), AppError> {
        Self::authorize(principal)?;
        tracing::info!("User {} set CDN development mode {}", principal.user_id, mode);

        self.cdn.set_dev_mode(mode).await
    }
}
