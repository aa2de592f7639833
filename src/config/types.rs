//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文本生成服务配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 外部服务提供方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google 官方 API
    #[default]
    Google,
    /// 本地假实现（离线开发用）
    Fake,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 前端静态文件目录（包含 index.html）
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 文本生成（Gemini）配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: ProviderKind,

    /// Gemini API Key，未设置时 prompt 接口返回 500
    #[serde(default)]
    pub api_key: Option<String>,

    /// 模型标识
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Generative Language API 基础 URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 缺少 API Key 时是否直接启动失败
    #[serde(default)]
    pub require_api_key: bool,
}

fn default_llm_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_llm_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            model: default_llm_model(),
            base_url: default_llm_base_url(),
            timeout_secs: default_timeout(),
            require_api_key: false,
        }
    }
}

impl LlmConfig {
    /// 是否配置了非空的 API Key
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// TTS（Google Cloud Text-to-Speech）配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub provider: ProviderKind,

    /// API Key；未设置时使用 Application Default Credentials
    #[serde(default)]
    pub api_key: Option<String>,

    /// 原始服务账号 JSON，启动时写入临时文件
    #[serde(default)]
    pub credentials_json: Option<String>,

    /// Text-to-Speech API 基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// 语言代码
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// 音色名称
    #[serde(default = "default_voice_name")]
    pub voice_name: String,

    /// SSML 性别标签
    #[serde(default = "default_ssml_gender")]
    pub ssml_gender: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// fake provider 返回的音频文件，未设置时返回占位数据
    #[serde(default)]
    pub fake_audio_path: Option<PathBuf>,

    /// fake provider 模拟合成延迟（毫秒）
    #[serde(default)]
    pub fake_latency_ms: u64,
}

fn default_tts_base_url() -> String {
    "https://texttospeech.googleapis.com/v1".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_voice_name() -> String {
    "en-US-Wavenet-F".to_string()
}

fn default_ssml_gender() -> String {
    "FEMALE".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            credentials_json: None,
            base_url: default_tts_base_url(),
            language_code: default_language_code(),
            voice_name: default_voice_name(),
            ssml_gender: default_ssml_gender(),
            timeout_secs: default_timeout(),
            fake_audio_path: None,
            fake_latency_ms: 0,
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 生成音频的存储目录（通过 /audio 对外提供）
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// 文件名追加随机后缀，避免同一毫秒内的覆盖
    #[serde(default)]
    pub unique_filenames: bool,
}

pub(crate) fn default_audio_dir() -> PathBuf {
    std::env::temp_dir().join("akari_audio")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            unique_filenames: false,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gemini-1.5-flash");
        assert_eq!(config.tts.voice_name, "en-US-Wavenet-F");
        assert_eq!(config.tts.ssml_gender, "FEMALE");
        assert!(!config.storage.unique_filenames);
        assert!(config.storage.audio_dir.ends_with("akari_audio"));
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_has_api_key_ignores_empty() {
        let mut config = LlmConfig::default();
        assert!(!config.has_api_key());
        config.api_key = Some(String::new());
        assert!(!config.has_api_key());
        config.api_key = Some("key".to_string());
        assert!(config.has_api_key());
    }

    #[test]
    fn test_provider_kind_deserialize() {
        let kind: ProviderKind = serde_json::from_str("\"fake\"").unwrap();
        assert_eq!(kind, ProviderKind::Fake);
    }
}
