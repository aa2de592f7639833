//! TTS Engine Port - 语音合成服务抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 音色参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceParams {
    /// 语言代码，如 en-US
    pub language_code: String,
    /// 音色名称，如 en-US-Wavenet-F
    pub name: String,
    /// SSML 性别标签，如 FEMALE
    pub ssml_gender: String,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            language_code: "en-US".to_string(),
            name: "en-US-Wavenet-F".to_string(),
            ssml_gender: "FEMALE".to_string(),
        }
    }
}

/// 语音合成请求
#[derive(Debug, Clone)]
pub struct SynthesizeRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 音色参数
    pub voice: VoiceParams,
}

/// 语音合成响应
#[derive(Debug, Clone)]
pub struct SynthesizeResponse {
    /// 编码后的音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行语音合成，输出编码固定为 MP3
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<SynthesizeResponse, TtsError>;
}
