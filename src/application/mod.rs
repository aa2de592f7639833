//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TextGenerator、TtsEngine、AudioStorage）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::{
    handlers::{FileNaming, GenerateAudioHandler, GeneratePromptHandler},
    GenerateAudio, GenerateAudioResponse, GeneratePrompt, GeneratePromptResponse,
};

pub use error::ApplicationError;

pub use ports::{
    AudioStorageError, AudioStoragePort, GenerateTextRequest, LlmError, SynthesizeRequest,
    SynthesizeResponse, TextGeneratorPort, TtsEnginePort, TtsError, VoiceParams,
};
