use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3333";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read from the environment (with `.env` support in
/// the binary).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS: {raw}"))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}
