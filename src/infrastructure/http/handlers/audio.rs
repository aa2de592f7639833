//! Audio Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateAudio;
use crate::infrastructure::http::dto::{AudioRequest, AudioResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub const AUDIO_FAILURE: &str = "Failed to generate audio.";

/// POST /api/generate-audio
pub async fn generate_audio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AudioRequest>, JsonRejection>,
) -> Result<Json<AudioResponse>, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => AudioRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let command = GenerateAudio {
        text: req.prompt.unwrap_or_default(),
    };

    let result = state
        .generate_audio_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, AUDIO_FAILURE))?;

    Ok(Json(AudioResponse {
        audio_url: result.audio_url,
    }))
}
