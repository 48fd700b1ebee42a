//! Axum route handler for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_assignment, GenerationRequest};
use crate::generation::humanizer::ThreadRandom;
use crate::state::AppState;

/// Both keys carry the same text; the browser client reads either.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub text: String,
    pub generated_text: String,
}

/// POST /api/generate
///
/// Builds the instruction block, calls the generation backend once and
/// humanizes the result. A malformed body is a validation error.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;

    let result =
        generate_assignment(state.generator.as_ref(), &request, &mut ThreadRandom).await?;

    Ok(Json(GenerateResponse {
        generated_text: result.text.clone(),
        text: result.text,
    }))
}
