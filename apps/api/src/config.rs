use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Default request body limit for upload routes (200 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote text-generation credential. `None` disables the remote path.
    pub openai_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_timeout: Duration,
    pub certificates_dir: PathBuf,
    /// Body limit for the routes that accept photos and certificate files.
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let llm_timeout_secs = optional("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            openai_api_key: optional("OPENAI_API_KEY"),
            llm_api_url: optional("LLM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            certificates_dir: optional("CERTIFICATES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("certificates")),
            max_upload_bytes: optional("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
