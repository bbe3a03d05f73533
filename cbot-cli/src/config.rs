//! App config loaded from env; CLI flags override.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// LOG_FILE
    log_file: String,
    /// CBOT_RNG_SEED; None seeds from the OS
    rng_seed: Option<u64>,
    /// CBOT_SNAPSHOT_PATH
    snapshot_path: Option<String>,
    /// CBOT_CUSTOMER_ID
    default_customer_id: String,
}

impl AppConfig {
    /// Load from environment variables. `seed` and `snapshot_path` override their env vars.
    pub fn load(seed: Option<u64>, snapshot_path: Option<String>) -> Result<Self> {
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/cbot.log".to_string());
        let rng_seed = match seed {
            Some(seed) => Some(seed),
            None => match env::var("CBOT_RNG_SEED") {
                Ok(raw) => Some(
                    raw.trim()
                        .parse()
                        .with_context(|| format!("CBOT_RNG_SEED is not a u64: {raw}"))?,
                ),
                Err(_) => None,
            },
        };
        let snapshot_path = snapshot_path.or_else(|| env::var("CBOT_SNAPSHOT_PATH").ok());
        let default_customer_id =
            env::var("CBOT_CUSTOMER_ID").unwrap_or_else(|_| "guest".to_string());

        Ok(Self {
            log_file,
            rng_seed,
            snapshot_path,
            default_customer_id,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.snapshot_path {
            if path.trim().is_empty() {
                anyhow::bail!("CBOT_SNAPSHOT_PATH (or --snapshot) is set but empty");
            }
        }
        if self.default_customer_id.trim().is_empty() {
            anyhow::bail!("CBOT_CUSTOMER_ID is set but empty");
        }
        Ok(())
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    pub fn snapshot_path(&self) -> Option<&str> {
        self.snapshot_path.as_deref()
    }

    pub fn default_customer_id(&self) -> &str {
        &self.default_customer_id
    }
}
