use anyhow::Result;
use std::env;
use std::time::Duration;

/// Settings of the AI plan source. Without an API key the AI path is off.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl AiConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("AI_API_KEY").ok().filter(|key| !key.trim().is_empty());
        let api_url = env::var("AI_API_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com/v1/messages".to_string());
        let model = env::var("AI_MODEL").unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string());
        let max_tokens = env::var("AI_MAX_TOKENS")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);
        let timeout_secs = env::var("AI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60);

        Ok(AiConfig {
            api_key,
            api_url,
            model,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_blank_key_disables_ai() {
        env::set_var("AI_API_KEY", "  ");
        let config = AiConfig::from_env().unwrap();
        assert!(!config.is_enabled());
        env::remove_var("AI_API_KEY");
    }

    #[test]
    #[serial]
    fn test_timeout_from_env() {
        env::set_var("AI_API_KEY", "secret");
        env::set_var("AI_TIMEOUT_SECS", "5");
        let config = AiConfig::from_env().unwrap();
        assert!(config.is_enabled());
        assert_eq!(config.timeout, Duration::from_secs(5));
        env::remove_var("AI_API_KEY");
        env::remove_var("AI_TIMEOUT_SECS");
    }
}
