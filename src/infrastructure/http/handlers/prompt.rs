//! Prompt Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{ApplicationError, GeneratePrompt};
use crate::infrastructure::http::dto::{PromptRequest, PromptResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub const PROMPT_FAILURE: &str = "Failed to generate prompt.";
pub const CLIENT_NOT_INITIALIZED: &str = "Gemini AI client not initialized.";

/// POST /api/generate-prompt
pub async fn generate_prompt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        // 非 JSON 请求体按空对象处理
        Err(JsonRejection::MissingJsonContentType(_)) => PromptRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let command = GeneratePrompt {
        mood: req.mood_text(),
        style: req.style_text(),
    };

    let result = state
        .generate_prompt_handler
        .handle(command)
        .await
        .map_err(|e| match e {
            ApplicationError::NotConfigured(detail) => {
                ApiError::internal(CLIENT_NOT_INITIALIZED, detail)
            }
            other => ApiError::from_application(other, PROMPT_FAILURE),
        })?;

    Ok(Json(PromptResponse {
        prompt: result.prompt,
    }))
}
