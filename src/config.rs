//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::llm::{LlmBackend, LlmConfig, groq};
use crate::planner::PromptStyle;

/// Environment variable holding the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Travel planner configuration.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Credential for the generation backend.
    pub api_key: SecretString,
    /// Model identifier sent with every request.
    pub model: String,
    /// OpenAI-compatible API base URL.
    pub base_url: String,
    /// Sampling temperature for generated text.
    pub temperature: f32,
    /// Upper bound on generated tokens per call.
    pub max_tokens: u32,
    /// HTTP timeout for a single generation call.
    pub request_timeout: Duration,
    /// Whether field prompts are static or generated.
    pub prompt_style: PromptStyle,
}

impl PlannerConfig {
    pub const DEFAULT_MODEL: &'static str = "llama-3.1-8b-instant";

    /// Build a config with defaults around the given key.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: groq::DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            request_timeout: Duration::from_secs(60),
            prompt_style: PromptStyle::Static,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Fails before any session exists if the API key is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_VAR.to_string()))?;

        let mut config = Self::new(SecretString::from(api_key));

        if let Some(model) = lookup("TRAVEL_PLANNER_MODEL") {
            config.model = model;
        }
        if let Some(url) = lookup("TRAVEL_PLANNER_BASE_URL") {
            config.base_url = url;
        }
        if let Some(raw) = lookup("TRAVEL_PLANNER_TEMPERATURE") {
            config.temperature = parse_value("TRAVEL_PLANNER_TEMPERATURE", &raw)?;
        }
        if let Some(raw) = lookup("TRAVEL_PLANNER_MAX_TOKENS") {
            config.max_tokens = parse_value("TRAVEL_PLANNER_MAX_TOKENS", &raw)?;
        }
        if let Some(raw) = lookup("TRAVEL_PLANNER_TIMEOUT_SECS") {
            let secs: u64 = parse_value("TRAVEL_PLANNER_TIMEOUT_SECS", &raw)?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("TRAVEL_PLANNER_PROMPT_STYLE") {
            config.prompt_style =
                raw.parse()
                    .map_err(|message: String| ConfigError::InvalidValue {
                        key: "TRAVEL_PLANNER_PROMPT_STYLE".to_string(),
                        message,
                    })?;
        }

        Ok(config)
    }

    /// LLM provider settings derived from this config.
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            backend: LlmBackend::Groq,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self.request_timeout,
        }
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = PlannerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == API_KEY_VAR));

        let err = PlannerConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn defaults_apply() {
        let config = PlannerConfig::from_lookup(lookup(&[(API_KEY_VAR, "gsk-123")])).unwrap();
        assert_eq!(config.api_key.expose_secret(), "gsk-123");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.prompt_style, PromptStyle::Static);
    }

    #[test]
    fn overrides_apply() {
        let config = PlannerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "gsk-123"),
            ("TRAVEL_PLANNER_MODEL", "llama-3.3-70b-versatile"),
            ("TRAVEL_PLANNER_MAX_TOKENS", "512"),
            ("TRAVEL_PLANNER_TIMEOUT_SECS", "10"),
            ("TRAVEL_PLANNER_PROMPT_STYLE", "generated"),
        ]))
        .unwrap();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.prompt_style, PromptStyle::Generated);
        assert_eq!(config.llm_config().model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = PlannerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "gsk-123"),
            ("TRAVEL_PLANNER_MAX_TOKENS", "lots"),
        ]))
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "TRAVEL_PLANNER_MAX_TOKENS")
        );

        let err = PlannerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "gsk-123"),
            ("TRAVEL_PLANNER_PROMPT_STYLE", "fancy"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
