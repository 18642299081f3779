use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub gemini_api_base: String,
    pub gemini_api_key: SecretString,
    pub gemini_models: Vec<String>,
    pub temperature: f32,
    pub max_output_tokens: i32,
    pub request_timeout_secs: u64,
    pub retry_backoff_ms: u64,
    pub data_dir: String,
    pub history_depth: usize,
    pub default_question_count: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| "dev_api_key".to_string()),
            ),
            gemini_models: env::var("GEMINI_MODELS")
                .unwrap_or_else(|_| "gemini-2.0-flash,gemini-1.5-flash,gemini-pro".to_string())
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            temperature: env::var("GEMINI_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2048),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            retry_backoff_ms: env::var("RETRY_BACKOFF_MS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(500),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            history_depth: env::var("HISTORY_DEPTH")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(10),
            default_question_count: env::var("DEFAULT_QUESTION_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(20),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.gemini_api_key.expose_secret();

        if api_key == "dev_api_key" || api_key.is_empty() {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }

        if self.gemini_models.is_empty() {
            panic!("FATAL: GEMINI_MODELS resolved to an empty model list.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            gemini_api_base: "http://127.0.0.1:1".to_string(),
            gemini_api_key: SecretString::from("test_api_key".to_string()),
            gemini_models: vec!["gemini-test".to_string()],
            temperature: 0.7,
            max_output_tokens: 512,
            request_timeout_secs: 1,
            retry_backoff_ms: 1,
            data_dir: std::env::temp_dir()
                .join("trivia-server-test")
                .to_string_lossy()
                .into_owned(),
            history_depth: 10,
            default_question_count: 20,
        }
    }
}
