use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;
use crate::rate_limit::{RateLimitPolicy, RateLimits};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SWEEP_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Clone)]
pub struct Config {
    /// Absent key disables the LLM-backed features.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub rate_limits: RateLimits,
    pub rate_limit_sweep: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = RateLimits::default();

        let rate_limits = RateLimits {
            generate_questions: per_day(
                &lookup,
                "RATE_LIMIT_GENERATE_PER_DAY",
                defaults.generate_questions,
            )?,
            evaluate_answer: per_day(
                &lookup,
                "RATE_LIMIT_EVALUATE_PER_DAY",
                defaults.evaluate_answer,
            )?,
            parse_resume: per_day(&lookup, "RATE_LIMIT_RESUME_PER_DAY", defaults.parse_resume)?,
        };

        let sweep_secs: u64 = parse_or(&lookup, "RATE_LIMIT_SWEEP_SECS", DEFAULT_SWEEP_SECS)?;
        if sweep_secs == 0 {
            bail!("RATE_LIMIT_SWEEP_SECS must be at least 1");
        }

        Ok(Config {
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            rate_limits,
            rate_limit_sweep: Duration::from_secs(sweep_secs),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_base_url", &self.openai_base_url)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("rate_limits", &self.rate_limits)
            .field("rate_limit_sweep", &self.rate_limit_sweep)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn per_day(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: RateLimitPolicy,
) -> Result<RateLimitPolicy> {
    let max_requests: u32 = parse_or(lookup, key, default.max_requests)?;
    if max_requests == 0 {
        bail!("{key} must be at least 1");
    }
    Ok(RateLimitPolicy::per_day(max_requests))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.rate_limits, RateLimits::default());
        assert_eq!(config.rate_limit_sweep, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "3000"),
            ("RATE_LIMIT_GENERATE_PER_DAY", "10"),
            ("RATE_LIMIT_SWEEP_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.rate_limits.generate_questions.max_requests, 10);
        assert_eq!(config.rate_limits.evaluate_answer.max_requests, 50);
        assert_eq!(config.rate_limit_sweep, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_api_key_disables_llm() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers_are_errors() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_RESUME_PER_DAY", "-1")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_EVALUATE_PER_DAY", "0")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_SWEEP_SECS", "0")]).is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-very-secret")]).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
