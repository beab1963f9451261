use std::sync::Arc;

use sideline_billing::{StripeClient, WebhookVerifier};
use sideline_config::Config;
use sideline_core::UsagePolicy;
use sideline_generate::Generator;
use sideline_store::Store;
use sideline_stt::Transcriber;

/// Shared per-process state injected into every handler
///
/// All provider clients live for the process lifetime; handlers hold no
/// state of their own, so anything cross-request goes through the store.
#[derive(Clone)]
pub struct AppState {
    pub transcriber: Arc<Transcriber>,
    pub generator: Arc<Generator>,
    pub store: Store,
    pub stripe: StripeClient,
    pub webhook_verifier: WebhookVerifier,
    /// Advisory free-tier rule; the client tracks its own count against it
    pub usage: UsagePolicy,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct every provider client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store or payment client fails to build
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let transcriber = Arc::new(Transcriber::new(&config.stt));
        let generator = Arc::new(Generator::new(&config.generation));
        let store = Store::new(&config.store)?;
        let stripe = StripeClient::new(&config.billing)?;
        let webhook_verifier = WebhookVerifier::new(
            config.billing.webhook_secret.clone(),
            config.billing.signature_tolerance_secs,
        );

        let usage = UsagePolicy::new(config.usage.free_limit);

        Ok(Self {
            transcriber,
            generator,
            store,
            stripe,
            webhook_verifier,
            usage,
            config: Arc::new(config),
        })
    }
}
