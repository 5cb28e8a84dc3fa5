use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Target state of the CDN's development mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DevMode {
    On,
    Off,
}

impl fmt::Display for DevMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
        }
    }
}
