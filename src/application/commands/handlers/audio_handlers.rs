//! Audio Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{GenerateAudio, GenerateAudioResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStoragePort, SynthesizeRequest, TtsEnginePort, VoiceParams};
use crate::domain::{AudioFileName, SpeechText};

/// 音频文件命名策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileNaming {
    /// akari_audio_<millis>.mp3，同一毫秒会互相覆盖
    #[default]
    Timestamp,
    /// 追加随机后缀
    Unique,
}

impl FileNaming {
    pub fn name_for(&self, timestamp_millis: i64) -> AudioFileName {
        match self {
            Self::Timestamp => AudioFileName::timestamped(timestamp_millis),
            Self::Unique => AudioFileName::unique(timestamp_millis),
        }
    }
}

/// GenerateAudio Handler
pub struct GenerateAudioHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    audio_storage: Arc<dyn AudioStoragePort>,
    voice: VoiceParams,
    naming: FileNaming,
}

impl GenerateAudioHandler {
    pub fn new(
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        voice: VoiceParams,
        naming: FileNaming,
    ) -> Self {
        Self {
            tts_engine,
            audio_storage,
            voice,
            naming,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateAudio,
    ) -> Result<GenerateAudioResponse, ApplicationError> {
        let text = SpeechText::new(command.text).map_err(ApplicationError::validation)?;

        tracing::info!(text_len = text.len(), "Generating speech for prompt");

        let response = self
            .tts_engine
            .synthesize(SynthesizeRequest {
                text: text.as_str().to_string(),
                voice: self.voice.clone(),
            })
            .await?;

        let file_name = self.naming.name_for(Utc::now().timestamp_millis());
        let path = self
            .audio_storage
            .save_audio(&file_name, &response.audio_data)
            .await?;

        tracing::info!(
            file_name = %file_name,
            path = %path.display(),
            size = response.audio_data.len(),
            "Audio content written to file"
        );

        Ok(GenerateAudioResponse {
            audio_url: file_name.public_url(),
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeTtsClient, FileAudioStorage};
    use tempfile::tempdir;

    async fn setup(
        tts: Arc<FakeTtsClient>,
        naming: FileNaming,
    ) -> (tempfile::TempDir, GenerateAudioHandler) {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(dir.path()).await.unwrap());
        let handler = GenerateAudioHandler::new(tts, storage, VoiceParams::default(), naming);
        (dir, handler)
    }

    #[tokio::test]
    async fn test_generate_audio_writes_file() {
        let tts = Arc::new(FakeTtsClient::with_audio(b"ID3 fake mp3".to_vec()));
        let (dir, handler) = setup(tts.clone(), FileNaming::Timestamp).await;

        let response = handler
            .handle(GenerateAudio {
                text: "Inhale, exhale.".to_string(),
            })
            .await
            .unwrap();

        let digits = response
            .audio_url
            .strip_prefix("/audio/akari_audio_")
            .and_then(|rest| rest.strip_suffix(".mp3"))
            .unwrap();
        assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));

        let written = std::fs::read(dir.path().join(response.file_name.as_str())).unwrap();
        assert_eq!(written, b"ID3 fake mp3");
        assert_eq!(tts.calls(), 1);

        let seen = tts.last_request().unwrap();
        assert_eq!(seen.text, "Inhale, exhale.");
        assert_eq!(seen.voice, VoiceParams::default());
    }

    #[tokio::test]
    async fn test_empty_text_skips_synthesis() {
        let tts = Arc::new(FakeTtsClient::with_audio(b"data".to_vec()));
        let (_dir, handler) = setup(tts.clone(), FileNaming::Timestamp).await;

        let result = handler
            .handle(GenerateAudio {
                text: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(tts.calls(), 0);
    }

    #[tokio::test]
    async fn test_synthesis_failure_writes_nothing() {
        let tts = Arc::new(FakeTtsClient::failing());
        let (dir, handler) = setup(tts, FileNaming::Timestamp).await;

        let result = handler
            .handle(GenerateAudio {
                text: "Namaste".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ExternalServiceError(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_unique_naming() {
        let tts = Arc::new(FakeTtsClient::with_audio(b"data".to_vec()));
        let (_dir, handler) = setup(tts, FileNaming::Unique).await;

        let first = handler
            .handle(GenerateAudio { text: "a".to_string() })
            .await
            .unwrap();
        let second = handler
            .handle(GenerateAudio { text: "b".to_string() })
            .await
            .unwrap();

        assert_ne!(first.audio_url, second.audio_url);
    }
}
