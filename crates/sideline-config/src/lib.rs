#![allow(clippy::must_use_candidate)]

pub mod billing;
mod env;
pub mod extraction;
pub mod generation;
pub mod health;
mod loader;
pub mod server;
pub mod store;
pub mod stt;
pub mod usage;

use serde::Deserialize;

pub use billing::BillingConfig;
pub use extraction::ExtractionConfig;
pub use generation::GenerationConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
pub use stt::SttConfig;
pub use usage::UsageConfig;

/// Top-level Sideline configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Session and entitlement store configuration
    pub store: StoreConfig,
    /// Speech-to-text provider configuration
    pub stt: SttConfig,
    /// Text generation provider configuration
    pub generation: GenerationConfig,
    /// PDF text extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Payment provider configuration
    pub billing: BillingConfig,
    /// Free-tier usage configuration
    #[serde(default)]
    pub usage: UsageConfig,
}
