/// LLM Client: the single point of entry for all text-generation calls in AssignMate.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All generation goes through the `TextGenerator` trait defined here.
///
/// Model: Mixtral-8x7B-Instruct (hardcoded, do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all generation calls.
pub const MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
const MAX_NEW_TOKENS: u32 = 1024;
const TEMPERATURE: f64 = 0.85;
const TOP_P: f64 = 0.9;
const REPETITION_PENALTY: f64 = 1.1;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-generation backend. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for `prompt`. Blank output is an error.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: SamplingParameters,
}

#[derive(Debug, Serialize)]
struct SamplingParameters {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
    repetition_penalty: f64,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            repetition_penalty: REPETITION_PENALTY,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: Option<String>,
}

/// The inference API answers with a one-element array for text-generation
/// models, but some deployments return the bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

impl InferenceResponse {
    fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Batch(items) => items.into_iter().next()?.generated_text,
            InferenceResponse::Single(item) => item.generated_text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

/// Hugging Face Inference API client.
/// One attempt per call: no retries and no client-side timeout.
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HfClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, MODEL)
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = InferenceRequest {
            inputs: prompt,
            parameters: SamplingParameters::default(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Try to parse error message
            let message = serde_json::from_str::<InferenceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: InferenceResponse = serde_json::from_str(&body)?;
        let text = parsed
            .into_text()
            .filter(|t| !t.trim().is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("Generation succeeded: {} chars", text.len());

        Ok(text)
    }
}
