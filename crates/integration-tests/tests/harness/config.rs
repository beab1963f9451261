//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use sideline_config::{
    BillingConfig, Config, ExtractionConfig, GenerationConfig, HealthConfig, ServerConfig, StoreConfig, SttConfig,
    UsageConfig,
};

/// Webhook signing secret every test configuration uses
pub const WEBHOOK_SECRET: &str = "whsec_integration";

/// Builder for constructing test configurations
///
/// Every provider defaults to an unroutable localhost port, so a test
/// only wires up the backends it exercises.
pub struct ConfigBuilder {
    stt_url: String,
    generation_url: String,
    store_url: String,
    billing_url: String,
    health_enabled: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            stt_url: "http://127.0.0.1:9".to_owned(),
            generation_url: "http://127.0.0.1:9".to_owned(),
            store_url: "http://127.0.0.1:9".to_owned(),
            billing_url: "http://127.0.0.1:9".to_owned(),
            health_enabled: true,
        }
    }

    /// Point the transcription client at a mock backend
    pub fn with_stt(mut self, base_url: &str) -> Self {
        self.stt_url = base_url.to_owned();
        self
    }

    /// Point the generation client at a mock backend
    pub fn with_generation(mut self, base_url: &str) -> Self {
        self.generation_url = base_url.to_owned();
        self
    }

    /// Point the session store at a mock backend
    pub fn with_store(mut self, base_url: &str) -> Self {
        self.store_url = base_url.to_owned();
        self
    }

    /// Point the payment client at a mock backend
    pub fn with_billing(mut self, base_url: &str) -> Self {
        self.billing_url = base_url.to_owned();
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.health_enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        Config {
            server: ServerConfig {
                listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                health: HealthConfig {
                    enabled: self.health_enabled,
                    ..HealthConfig::default()
                },
            },
            store: StoreConfig {
                url: format!("{}/", self.store_url.trim_end_matches('/'))
                    .parse()
                    .expect("valid URL"),
                service_key: SecretString::from("test-service-key"),
                session_table: "schedule_sessions".to_owned(),
                entitlement_table: "email_signups".to_owned(),
                retention_hours: 72,
            },
            stt: SttConfig {
                api_key: SecretString::from("test-key"),
                base_url: Some(self.stt_url),
                model: "whisper-1".to_owned(),
            },
            generation: GenerationConfig {
                api_key: SecretString::from("test-key"),
                base_url: Some(self.generation_url),
                model: "gpt-4o-mini".to_owned(),
            },
            extraction: ExtractionConfig::default(),
            billing: BillingConfig {
                secret_key: SecretString::from("sk_test"),
                webhook_secret: SecretString::from(WEBHOOK_SECRET),
                monthly_price_id: "price_month".to_owned(),
                annual_price_id: "price_year".to_owned(),
                success_url: "https://sideline.app/?success=true".to_owned(),
                cancel_url: "https://sideline.app/?canceled=true".to_owned(),
                base_url: Some(self.billing_url),
                signature_tolerance_secs: 300,
            },
            usage: UsageConfig::default(),
        }
    }
}
