use jiff::{Span, Timestamp};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sideline_config::StoreConfig;
use url::Url;

use crate::error::StoreError;

/// Async client for the session and entitlement tables
///
/// Talks PostgREST (Supabase) over plain point reads and writes. There are
/// no transactions: a replacement upload is delete-then-insert, and expiry
/// is a lazy sweep folded into every create. Two concurrent creates naming
/// the same old session can both issue the delete; sessions are disposable
/// per-device scratch state, so last write wins.
#[derive(Clone)]
pub struct Store {
    http: reqwest::Client,
    base_url: Url,
    service_key: SecretString,
    session_table: String,
    entitlement_table: String,
    retention: Span,
}

#[derive(Serialize)]
struct SessionRow<'a> {
    session_id: &'a str,
    extracted_text: &'a str,
}

#[derive(Deserialize)]
struct SessionText {
    extracted_text: String,
}

#[derive(Serialize)]
struct EntitlementRow<'a> {
    email: &'a str,
    is_paid: bool,
    stripe_customer_id: Option<&'a str>,
}

impl Store {
    /// Create a store client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the retention
    /// window does not fit a span
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build().map_err(StoreError::Request)?;

        let hours = i64::try_from(config.retention_hours)
            .map_err(|_| StoreError::Config(format!("retention_hours out of range: {}", config.retention_hours)))?;
        let retention = Span::new().try_hours(hours).map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            service_key: config.service_key.clone(),
            session_table: config.session_table.clone(),
            entitlement_table: config.entitlement_table.clone(),
            retention,
        })
    }

    /// Persist extracted schedule text under a fresh session id
    ///
    /// Deletes the superseded row when `old_session_id` is given (a miss is
    /// a silent no-op), sweeps rows older than the retention window, then
    /// inserts the new row. Returns the generated id.
    pub async fn create_session(
        &self,
        extracted_text: &str,
        old_session_id: Option<&str>,
    ) -> Result<String, StoreError> {
        if let Some(old_id) = old_session_id {
            self.delete_session(old_id).await?;
            tracing::debug!(session_id = %old_id, "superseded session deleted");
        }

        self.sweep_expired().await?;

        let session_id = format!("sched_{}", uuid::Uuid::new_v4().simple());
        let url = self.table_url(&self.session_table)?;

        let row = SessionRow {
            session_id: &session_id,
            extracted_text,
        };

        let response = self
            .authorized(self.http.post(url))
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        tracing::debug!(session_id = %session_id, chars = extracted_text.len(), "session created");

        Ok(session_id)
    }

    /// Fetch the stored text for a session
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no live row matches the id.
    pub async fn get_session(&self, session_id: &str) -> Result<String, StoreError> {
        let url = self.table_url(&self.session_table)?;

        let response = self
            .authorized(self.http.get(url))
            .query(&[
                ("session_id", format!("eq.{session_id}")),
                ("select", "extracted_text".to_owned()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let mut rows: Vec<SessionText> = response.json().await?;

        match rows.pop() {
            Some(row) => Ok(row.extracted_text),
            None => Err(StoreError::NotFound),
        }
    }

    /// Record a paid entitlement for an email
    ///
    /// Upserts on the email column so repeated webhook deliveries are
    /// harmless.
    pub async fn mark_paid(&self, email: &str, stripe_customer_id: Option<&str>) -> Result<(), StoreError> {
        let url = self.table_url(&self.entitlement_table)?;

        let row = EntitlementRow {
            email,
            is_paid: true,
            stripe_customer_id,
        };

        let response = self
            .authorized(self.http.post(url))
            .query(&[("on_conflict", "email")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        tracing::info!(%email, "entitlement recorded");

        Ok(())
    }

    /// Delete the row for a specific session id
    ///
    /// PostgREST deletes are idempotent; a miss returns success with no
    /// affected rows, which matches the silent no-op contract.
    async fn delete_session(&self, session_id: &str) -> Result<(), StoreError> {
        let url = self.table_url(&self.session_table)?;

        let response = self
            .authorized(self.http.delete(url))
            .query(&[("session_id", format!("eq.{session_id}"))])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }

    /// Delete every session older than the retention window
    ///
    /// Runs inside `create_session`, so expiry is lazy: an expired row can
    /// linger until the next write anywhere in the table removes it.
    async fn sweep_expired(&self) -> Result<(), StoreError> {
        let cutoff = Timestamp::now()
            .checked_sub(self.retention)
            .map_err(|e| StoreError::Config(format!("retention cutoff out of range: {e}")))?;

        let url = self.table_url(&self.session_table)?;

        let response = self
            .authorized(self.http.delete(url))
            .query(&[("created_at", format!("lt.{cutoff}"))])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(table)
            .map_err(|e| StoreError::Config(format!("invalid table URL: {e}")))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.service_key.expose_secret())
            .header(
                "Authorization",
                format!("Bearer {}", self.service_key.expose_secret()),
            )
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("base_url", &self.base_url)
            .field("session_table", &self.session_table)
            .field("entitlement_table", &self.entitlement_table)
            .finish_non_exhaustive()
    }
}

async fn api_error(response: reqwest::Response) -> StoreError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    StoreError::Api { status, message }
}
