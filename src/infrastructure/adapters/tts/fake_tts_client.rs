//! Fake TTS Client - 离线开发与测试用的 TTS 客户端
//!
//! 始终返回固定的音频数据，不实际调用 TTS 服务

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};

/// 未指定音频文件时返回的占位数据（MPEG 帧头 + 填充）
const PLACEHOLDER_AUDIO: &[u8] = &[
    0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Fake TTS Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频文件路径，None 时返回占位数据
    pub audio_file_path: Option<PathBuf>,
    /// 模拟合成延迟（毫秒）
    pub latency_ms: u64,
}

/// Fake TTS Client
pub struct FakeTtsClient {
    /// None 表示每次调用都失败
    audio_data: Option<Vec<u8>>,
    latency_ms: u64,
    calls: AtomicUsize,
    last_request: Mutex<Option<SynthesizeRequest>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Result<Self, std::io::Error> {
        let audio_data = match &config.audio_file_path {
            Some(path) => std::fs::read(path)?,
            None => PLACEHOLDER_AUDIO.to_vec(),
        };
        tracing::info!(
            path = ?config.audio_file_path,
            size = audio_data.len(),
            "FakeTtsClient initialized"
        );
        let mut client = Self::with_audio(audio_data);
        client.latency_ms = config.latency_ms;
        Ok(client)
    }

    /// 直接指定返回的音频数据
    pub fn with_audio(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data: Some(audio_data),
            latency_ms: 0,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// 模拟上游故障
    pub fn failing() -> Self {
        Self {
            audio_data: None,
            latency_ms: 0,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// 已收到的合成请求数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SynthesizeRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<SynthesizeResponse, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice.name,
            "FakeTtsClient: returning fixed audio"
        );

        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request);
        }

        if self.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.latency_ms)).await;
        }

        let audio_data = self
            .audio_data
            .clone()
            .ok_or_else(|| TtsError::ServiceError("fake upstream failure".to_string()))?;

        Ok(SynthesizeResponse { audio_data })
    }
}
