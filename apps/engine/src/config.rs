use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults reproduce stock behavior.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional path to a JSON content file replacing the built-in dataset.
    pub data_path: Option<PathBuf>,
    /// Minimum keyword-overlap score for an FAQ entry to be served.
    pub faq_score_threshold: usize,
    /// Question words at or below this length are ignored when scoring FAQs.
    pub faq_min_word_len: usize,
    /// Simulated typing delay applied by the chat surface, in milliseconds.
    pub typing_delay_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_path: std::env::var("SAKHI_DATA").ok().map(PathBuf::from),
            faq_score_threshold: parse_env("FAQ_SCORE_THRESHOLD", 2)?,
            faq_min_word_len: parse_env("FAQ_MIN_WORD_LEN", 3)?,
            typing_delay_ms: parse_env("TYPING_DELAY_MS", 800)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Serialize env access: cargo runs tests in parallel.
        std::env::remove_var("FAQ_SCORE_THRESHOLD");
        std::env::remove_var("FAQ_MIN_WORD_LEN");
        let config = Config::from_env().unwrap();
        assert_eq!(config.faq_score_threshold, 2);
        assert_eq!(config.faq_min_word_len, 3);
        assert_eq!(config.typing_delay_ms, 800);
    }
}
