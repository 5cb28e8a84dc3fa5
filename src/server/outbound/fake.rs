//! Recording stand-ins for outbound collaborators.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::{cloudflare::DevMode, mods::CatalogModResponse},
    outbound::{CdnAdmin, Mail, Mailer, ModCatalog, Outbound},
};

/// Mailer that keeps every message and can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Mail>>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `Upstream`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: &Mail) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Upstream("mail relay unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Operation observed by [`RecordingCdn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdnOp {
    Purge,
    DevMode(DevMode),
}

#[derive(Clone, Default)]
pub struct RecordingCdn {
    ops: Arc<Mutex<Vec<CdnOp>>>,
}

impl RecordingCdn {
    pub fn ops(&self) -> Vec<CdnOp> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl CdnAdmin for RecordingCdn {
    async fn purge_everything(&self) -> Result<(), AppError> {
        self.ops.lock().unwrap().push(CdnOp::Purge);
        Ok(())
    }

    async fn set_dev_mode(&self, mode: DevMode) -> Result<(), AppError> {
        self.ops.lock().unwrap().push(CdnOp::DevMode(mode));
        Ok(())
    }
}

/// Catalog answering from a fixed map of JSON responses.
#[derive(Clone, Default)]
pub struct StaticCatalog {
    responses: HashMap<u64, serde_json::Value>,
}

impl StaticCatalog {
    pub fn with_mod(mut self, id: u64, response: serde_json::Value) -> Self {
        self.responses.insert(id, response);
        self
    }
}

#[async_trait]
impl ModCatalog for StaticCatalog {
    async fn get_mod(&self, id: u64) -> Result<CatalogModResponse, AppError> {
        let response = self
            .responses
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Mod {id} not found in catalog")))?;

        serde_json::from_value(response.clone())
            .map_err(|e| AppError::Upstream(format!("Unexpected catalog response: {e}")))
    }
}

/// Fakes wired into an [`Outbound`] bundle, kept for assertions.
pub struct FakeOutbound {
    pub mailer: RecordingMailer,
    pub cdn: RecordingCdn,
    pub catalog: StaticCatalog,
}

impl FakeOutbound {
    pub fn new() -> Self {
        Self {
            mailer: RecordingMailer::new(),
            cdn: RecordingCdn::default(),
            catalog: StaticCatalog::default(),
        }
    }

    pub fn with_mailer(mut self, mailer: RecordingMailer) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn with_catalog(mut self, catalog: StaticCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn outbound(&self) -> Outbound {
        Outbound::new(
            Arc::new(self.mailer.clone()),
            Arc::new(self.cdn.clone()),
            Arc::new(self.catalog.clone()),
        )
    }
}
