//! Assignment Generation: orchestrates one request end to end.
//!
//! Flow: validate → build instruction block → generate → humanize → return.
//!
//! Single attempt. A backend failure surfaces as `AppError::Generation`; nothing
//! is retried or stored.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::humanizer::{self, RandomSource};
use crate::generation::prompts::build_instruction_block;
use crate::llm_client::{LlmError, TextGenerator};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body shared by `/api/generate` and `/api/analyze`.
///
/// Missing fields deserialize to the empty string and are then rejected by
/// `validate`, so a partial body is a 400 rather than a 422. Only empty strings
/// are rejected; whitespace is content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub writing_sample: String,
    pub assignment_prompt: String,
    pub materials: String,
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.writing_sample.is_empty() || self.assignment_prompt.is_empty() {
            return Err(AppError::Validation(
                "Writing sample and assignment prompt are required".to_string(),
            ));
        }
        Ok(())
    }

    /// `None` when no materials were pasted.
    pub fn materials(&self) -> Option<&str> {
        Some(self.materials.as_str()).filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the generation pipeline for one request.
///
/// Steps:
/// 1. `build_instruction_block()` from the raw request fields
/// 2. `generator.generate()`, one call
/// 3. `humanizer::apply()` with the supplied random source
pub async fn generate_assignment(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
    rng: &mut dyn RandomSource,
) -> Result<GenerationResult, AppError> {
    request.validate()?;

    let instruction_block = build_instruction_block(
        &request.writing_sample,
        request.materials(),
        &request.assignment_prompt,
    );
    info!(
        "Generating assignment: sample={} chars, prompt={} chars, materials={}",
        request.writing_sample.len(),
        request.assignment_prompt.len(),
        request.materials().is_some()
    );

    let raw = generator.generate(&instruction_block).await?;
    let text = humanizer::apply(&raw, rng);

    if text.trim().is_empty() {
        return Err(AppError::Generation(LlmError::EmptyContent));
    }

    info!("Generated assignment: {} chars", text.len());
    Ok(GenerationResult { text })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::generation::humanizer::tests::Fixed;
    use crate::generation::prompts::DO_NOT_COPY_INSTRUCTION;

    /// Records every prompt it receives and answers with a canned reply.
    pub(crate) struct StubGenerator {
        reply: Result<String, u16>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "Model is currently loading".to_string(),
                }),
            }
        }
    }

    fn request(sample: &str, prompt: &str, materials: &str) -> GenerationRequest {
        GenerationRequest {
            writing_sample: sample.to_string(),
            assignment_prompt: prompt.to_string(),
            materials: materials.to_string(),
        }
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let parsed: GenerationRequest =
            serde_json::from_str(r#"{"writingSample": "Mine."}"#).unwrap();
        assert_eq!(parsed.writing_sample, "Mine.");
        assert!(parsed.assignment_prompt.is_empty());
        assert_eq!(parsed.materials(), None);
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_only_empty_fields_rejected() {
        assert!(request("", "Prompt", "").validate().is_err());
        assert!(request("Sample", "", "").validate().is_err());
        assert!(request("   ", "\n\t", "").validate().is_ok());
    }

    #[test]
    fn test_whitespace_materials_passed_through() {
        assert_eq!(request("Sample", "Prompt", "  ").materials(), Some("  "));
        assert_eq!(request("Sample", "Prompt", "").materials(), None);
    }

    #[tokio::test]
    async fn test_generate_returns_humanized_backend_text() {
        let stub = StubGenerator::replying("  The essay body.\n");
        let result = generate_assignment(
            &stub,
            &request("My sample.", "Write about X", ""),
            &mut Fixed(0.999),
        )
        .await
        .unwrap();
        assert_eq!(result.text, "  The essay body.\n");
    }

    #[tokio::test]
    async fn test_prompt_forbids_copying_without_materials() {
        let stub = StubGenerator::replying("Done.");
        generate_assignment(&stub, &request("Sample.", "Prompt", ""), &mut Fixed(0.999))
            .await
            .unwrap();

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(DO_NOT_COPY_INSTRUCTION));
        assert!(prompts[0].contains("Use general knowledge on the topic"));
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_backend() {
        let stub = StubGenerator::replying("unused");
        let err = generate_assignment(&stub, &request("", "Prompt", ""), &mut Fixed(0.999))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_is_generation_error() {
        let stub = StubGenerator::failing(503);
        let err = generate_assignment(&stub, &request("Sample.", "Prompt", ""), &mut Fixed(0.999))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(LlmError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_blank_backend_text_is_error() {
        let stub = StubGenerator::replying("   ");
        let err = generate_assignment(&stub, &request("Sample.", "Prompt", ""), &mut Fixed(0.999))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(LlmError::EmptyContent)));
    }
}
