use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::AgeBand,
};

/// Raw text returned by the generative model, tagged with the model that
/// produced it. Always untrusted; callers run it through the repair pipeline.
#[derive(Debug, Clone)]
pub struct ProviderText {
    pub text: String,
    pub model: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    async fn fetch_raw(&self, count: usize, age_band: AgeBand) -> AppResult<ProviderText>;
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

/// Question provider backed by the Gemini `generateContent` REST endpoint.
/// Tries each configured model in order with a short backoff between
/// attempts; the caller handles the static-bank fallback once every model
/// has failed.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    models: Vec<String>,
    temperature: f32,
    max_output_tokens: i32,
    retry_backoff: Duration,
}

impl GeminiProvider {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.gemini_api_base.clone(),
            api_key: config.gemini_api_key.clone(),
            models: config.gemini_models.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    async fn generate(&self, model: &str, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base,
            model,
            self.api_key.expose_secret()
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "Model '{}' returned {}: {}",
                model, status, body
            )));
        }

        let parsed: GeminiResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                AppError::MalformedResponse(format!("Model '{}' returned no candidates", model))
            })
    }
}

#[async_trait]
impl QuestionProvider for GeminiProvider {
    async fn fetch_raw(&self, count: usize, age_band: AgeBand) -> AppResult<ProviderText> {
        let prompt = prompts::question_prompt(count, age_band);
        let mut last_error =
            AppError::UpstreamUnavailable("No generative models configured".to_string());

        for (attempt, model) in self.models.iter().enumerate() {
            if attempt > 0 {
                tokio::time::sleep(self.retry_backoff).await;
            }

            match self.generate(model, &prompt).await {
                Ok(text) => {
                    log::info!("Model '{}' produced a question set", model);
                    return Ok(ProviderText {
                        text,
                        model: model.clone(),
                    });
                }
                Err(err) => {
                    log::warn!("Model '{}' failed: {}", model, err);
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_request_uses_wire_field_names() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "שלום".to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: 0.7,
                max_output_tokens: 2048,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "שלום");
    }

    #[test]
    fn gemini_response_tolerates_missing_candidates() {
        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn provider_builds_from_config() {
        let config = Config::test_config();
        let provider = GeminiProvider::new(&config).unwrap();
        assert_eq!(provider.models, vec!["gemini-test".to_string()]);
    }

    #[tokio::test]
    async fn unreachable_endpoint_exhausts_models() {
        // test_config points at a closed local port, so every model attempt
        // fails fast and the provider reports upstream-unavailable
        let config = Config::test_config();
        let provider = GeminiProvider::new(&config).unwrap();

        let result = provider.fetch_raw(3, AgeBand::Middle).await;
        assert!(result.is_err());
    }
}
