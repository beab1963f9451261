use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a section carries an out-of-range value
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store.retention_hours == 0 {
            anyhow::bail!("store.retention_hours must be at least 1");
        }

        if self.extraction.min_text_chars == 0 {
            anyhow::bail!("extraction.min_text_chars must be at least 1");
        }

        if self.billing.signature_tolerance_secs == 0 {
            anyhow::bail!("billing.signature_tolerance_secs must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const MINIMAL: &str = r#"
        [store]
        url = "https://project.supabase.co/rest/v1/"
        service_key = "service-key"

        [stt]
        api_key = "sk-openai"

        [generation]
        api_key = "sk-openai"

        [billing]
        secret_key = "sk-stripe"
        webhook_secret = "whsec-test"
        monthly_price_id = "price_monthly"
        annual_price_id = "price_annual"
        success_url = "https://sideline.app/?success=true"
        cancel_url = "https://sideline.app/?cancel=true"
    "#;

    #[test]
    fn loads_minimal_config() {
        let file = write_config(MINIMAL);
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.store.retention_hours, 72);
        assert_eq!(config.store.session_table, "schedule_sessions");
        assert_eq!(config.stt.model, "whisper-1");
        assert_eq!(config.generation.model, "gpt-4o-mini");
        assert_eq!(config.extraction.min_text_chars, 50);
        assert_eq!(config.usage.free_limit, 7);
        assert!(config.server.health.enabled);
    }

    #[test]
    fn expands_env_placeholders() {
        temp_env::with_var("SL_STRIPE_KEY", Some("sk-from-env"), || {
            let contents = MINIMAL.replace("\"sk-stripe\"", "\"{{ env.SL_STRIPE_KEY }}\"");
            let file = write_config(&contents);
            // Load succeeds only if the placeholder resolved to a value
            assert!(Config::load(file.path()).is_ok());
        });
    }

    #[test]
    fn rejects_zero_retention() {
        let contents = MINIMAL.replace(
            "service_key = \"service-key\"",
            "service_key = \"service-key\"\nretention_hours = 0",
        );
        let file = write_config(&contents);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let contents = format!("{MINIMAL}\nmystery = true\n");
        let file = write_config(&contents);
        assert!(Config::load(file.path()).is_err());
    }
}
