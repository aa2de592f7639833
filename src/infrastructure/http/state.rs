//! Application State
//!
//! 长生命周期的客户端句柄在启动时显式构建，注入到命令处理器中

use std::sync::Arc;

use crate::application::{
    AudioStoragePort, FileNaming, GenerateAudioHandler, GeneratePromptHandler,
    TextGeneratorPort, TtsEnginePort, VoiceParams,
};

/// 生成参数
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// 文本生成模型
    pub model: String,
    /// 语音合成音色
    pub voice: VoiceParams,
    /// 音频文件命名策略
    pub naming: FileNaming,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            voice: VoiceParams::default(),
            naming: FileNaming::default(),
        }
    }
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub audio_storage: Arc<dyn AudioStoragePort>,

    // ========== Command Handlers ==========
    pub generate_prompt_handler: GeneratePromptHandler,
    pub generate_audio_handler: GenerateAudioHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `text_generator` 为 None 时 prompt 接口对每个请求返回 500
    pub fn new(
        text_generator: Option<Arc<dyn TextGeneratorPort>>,
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            audio_storage: audio_storage.clone(),
            generate_prompt_handler: GeneratePromptHandler::new(text_generator, settings.model),
            generate_audio_handler: GenerateAudioHandler::new(
                tts_engine,
                audio_storage,
                settings.voice,
                settings.naming,
            ),
        }
    }
}
