//! Akari - 瑜伽课程语音生成后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 课程描述指令模板、音频文件命名
//!
//! 应用层 (application/):
//! - Ports: TextGenerator, TtsEngine, AudioStorage
//! - Commands: GeneratePrompt, GenerateAudio
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Gemini 客户端, Google Cloud TTS 客户端, 文件存储
//! - HTTP: JSON API + 静态文件服务
//!
//! 配置 (config/): 多源配置加载与凭据引导

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
