//! Audio File - 生成音频的命名与对外 URL

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 文件名前缀
pub const AUDIO_FILE_PREFIX: &str = "akari_audio_";

/// 输出编码固定为 MP3
pub const AUDIO_FILE_EXTENSION: &str = "mp3";

/// 音频目录的挂载路径
pub const AUDIO_MOUNT_PATH: &str = "/audio";

/// 待合成的文本
///
/// 不变量: 非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn new(text: impl Into<String>) -> Result<Self, &'static str> {
        let text = text.into();
        if text.is_empty() {
            return Err("Prompt text is required.");
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 音频文件名
///
/// 基于毫秒时间戳生成，同一毫秒内的两个请求会得到相同的文件名
/// （后写入者覆盖前者），除非启用随机后缀。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioFileName(String);

impl AudioFileName {
    /// `akari_audio_<millis>.mp3`
    pub fn timestamped(timestamp_millis: i64) -> Self {
        Self(format!(
            "{}{}.{}",
            AUDIO_FILE_PREFIX, timestamp_millis, AUDIO_FILE_EXTENSION
        ))
    }

    /// `akari_audio_<millis>_<uuid>.mp3`
    pub fn unique(timestamp_millis: i64) -> Self {
        Self(format!(
            "{}{}_{}.{}",
            AUDIO_FILE_PREFIX,
            timestamp_millis,
            Uuid::new_v4().simple(),
            AUDIO_FILE_EXTENSION
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 前端可直接请求的相对 URL
    pub fn public_url(&self) -> String {
        format!("{}/{}", AUDIO_MOUNT_PATH, self.0)
    }
}

impl std::fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
