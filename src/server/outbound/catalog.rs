use async_trait::async_trait;

use crate::server::{error::AppError, model::mods::CatalogModResponse};

const CURSEFORGE_API: &str = "https://api.curseforge.com/v1";

#[async_trait]
pub trait ModCatalog: Send + Sync {
    /// Fetches the catalog record of a mod by its numeric catalog id.
    ///
    /// Fields the catalog leaves out or sets to `null` come back as `None`; deciding
    /// whether that is an error is up to the caller.
    async fn get_mod(&self, id: u64) -> Result<CatalogModResponse, AppError>;
}

/// CurseForge REST client.
pub struct CurseForgeClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl CurseForgeClient {
    pub fn new(http_client: reqwest::Client, api_key: String) -> Self {
        Self {
            http_client,
            api_key,
        }
    }
}

#[async_trait]
impl ModCatalog for CurseForgeClient {
    async fn get_mod(&self, id: u64) -> Result<CatalogModResponse, AppError> {
        let response = self
            .http_client
            .get(format!("{CURSEFORGE_API}/mods/{id}"))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Mod {id} not found in catalog")));
        }

        Ok(response.error_for_status()?.json::<CatalogModResponse>().await?)
    }
}
