// src/config/mod.rs
// Runtime configuration, loaded from the environment with .env support

use std::fmt;
use std::str::FromStr;

#[derive(Clone)]
pub struct Config {
    // ── Provider Configuration
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        let defaults = Self::default();
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            openai_base_url: env_var_or("OPENAI_BASE_URL", defaults.openai_base_url),
            model: env_var_or("MAILTRIAGE_MODEL", defaults.model),
            temperature: env_var_or("MAILTRIAGE_TEMPERATURE", defaults.temperature),
            host: env_var_or("MAILTRIAGE_HOST", defaults.host),
            port: env_var_or("MAILTRIAGE_PORT", defaults.port),
            request_timeout_secs: env_var_or(
                "MAILTRIAGE_REQUEST_TIMEOUT",
                defaults.request_timeout_secs,
            ),
            max_upload_bytes: env_var_or("MAILTRIAGE_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            log_level: env_var_or("MAILTRIAGE_LOG_LEVEL", defaults.log_level),
        }
    }

    /// Whether a provider credential is configured. Without one the service
    /// still runs, classifying with rules only.
    pub fn has_credential(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_secs: 30,
            max_upload_bytes: 5 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}

// Keep the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert!(config.openai_api_key.is_none());
        assert!(!config.has_credential());
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Config::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = Config {
            openai_api_key: Some("sk-super-secret".to_string()),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-super-secret"));
        assert!(rendered.contains("***"));
    }
}
