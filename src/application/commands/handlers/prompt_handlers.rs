//! Prompt Command Handlers

use std::sync::Arc;

use crate::application::commands::{GeneratePrompt, GeneratePromptResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{GenerateTextRequest, TextGeneratorPort};
use crate::domain::YogaBrief;

/// GeneratePrompt Handler
///
/// text_generator 为 None 表示未配置 API Key，此时不会发起远程调用
pub struct GeneratePromptHandler {
    text_generator: Option<Arc<dyn TextGeneratorPort>>,
    model: String,
}

impl GeneratePromptHandler {
    pub fn new(text_generator: Option<Arc<dyn TextGeneratorPort>>, model: impl Into<String>) -> Self {
        Self {
            text_generator,
            model: model.into(),
        }
    }

    pub async fn handle(
        &self,
        command: GeneratePrompt,
    ) -> Result<GeneratePromptResponse, ApplicationError> {
        let generator = self
            .text_generator
            .as_ref()
            .ok_or_else(|| ApplicationError::not_configured("text generator"))?;

        let brief = YogaBrief::new(command.mood, command.style);
        let request = GenerateTextRequest {
            model: self.model.clone(),
            instruction: brief.instruction(),
        };

        let prompt = generator.generate(request).await?;

        tracing::info!(
            mood = %brief.mood,
            style = %brief.style,
            prompt = %prompt,
            "Generated descriptive text"
        );

        Ok(GeneratePromptResponse { prompt })
    }
}
