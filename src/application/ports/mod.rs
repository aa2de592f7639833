//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod text_generator;
mod tts_engine;

pub use audio_storage::{AudioStorageError, AudioStoragePort};
pub use text_generator::{GenerateTextRequest, LlmError, TextGeneratorPort};
pub use tts_engine::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError, VoiceParams};
