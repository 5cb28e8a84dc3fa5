//! Outbound effects: email, CDN administration and the external mod catalog.
//!
//! Services never talk to these systems directly. They receive an [`Outbound`]
//! bundle of trait objects, so core logic runs against recording fakes in tests and
//! against the HTTP clients below in production.
//!
//! Every call completes (or fails) within the request that triggered it. There is no
//! queue and no retry; timeouts come from the shared `reqwest::Client`.

pub mod catalog;
pub mod cdn;
pub mod mailer;

#[cfg(test)]
pub mod fake;

use std::sync::Arc;

pub use catalog::{CurseForgeClient, ModCatalog};
pub use cdn::{CdnAdmin, CloudflareClient};
pub use mailer::{HttpMailer, LogMailer, Mail, Mailer};

/// Outbound collaborators handed to services.
#[derive(Clone)]
pub struct Outbound {
    pub mailer: Arc<dyn Mailer>,
    pub cdn: Arc<dyn CdnAdmin>,
    pub catalog: Arc<dyn ModCatalog>,
}

impl Outbound {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        cdn: Arc<dyn CdnAdmin>,
        catalog: Arc<dyn ModCatalog>,
    ) -> Self {
        Self {
            mailer,
            cdn,
            catalog,
        }
    }
}
