//! Axum route handler for the Analysis API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use tracing::info;

use crate::analysis::assignment::{analyze_assignment_prompt, PromptProfile};
use crate::analysis::lexicon::LEXICON_VERSION;
use crate::analysis::materials::{extract_material_profile, MaterialProfile};
use crate::analysis::style::{analyze_writing_style, StyleProfile};
use crate::errors::AppError;
use crate::generation::generator::GenerationRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub lexicon_version: u32,
    pub style_profile: StyleProfile,
    pub material_profile: MaterialProfile,
    pub prompt_profile: PromptProfile,
}

/// POST /api/analyze
///
/// Runs the three analyzers over the same body `/api/generate` accepts.
/// No backend call is made.
pub async fn handle_analyze(
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let style_profile = analyze_writing_style(&request.writing_sample);
    let material_profile = extract_material_profile(&request.materials);
    let prompt_profile = analyze_assignment_prompt(&request.assignment_prompt);
    info!(
        "Analyzed request: {:?} style, {:?} assignment, {:?} materials",
        style_profile
            .features()
            .map(|f| f.stylistic_preferences.formality_level),
        prompt_profile.assignment_type,
        material_profile.material_type
    );

    Ok(Json(AnalyzeResponse {
        lexicon_version: LEXICON_VERSION,
        style_profile,
        material_profile,
        prompt_profile,
    }))
}
