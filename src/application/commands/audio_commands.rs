//! Audio Commands

use crate::domain::AudioFileName;

/// 合成语音命令
#[derive(Debug, Clone)]
pub struct GenerateAudio {
    pub text: String,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct GenerateAudioResponse {
    pub file_name: AudioFileName,
    /// 相对 URL，如 /audio/akari_audio_1700000000000.mp3
    pub audio_url: String,
}
