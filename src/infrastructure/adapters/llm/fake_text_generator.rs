//! Fake Text Generator - 离线开发与测试用
//!
//! 始终返回固定文本，不调用外部服务

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{GenerateTextRequest, LlmError, TextGeneratorPort};

/// 默认返回的描述文本
pub const FAKE_PROMPT: &str = "Settle into a slow, steady breath as soft light fills the room. \
     Let each exhale carry tension away from your shoulders.";

/// Fake Text Generator
pub struct FakeTextGenerator {
    /// None 表示每次调用都失败
    text: Option<String>,
    last_request: Mutex<Option<GenerateTextRequest>>,
}

impl FakeTextGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            last_request: Mutex::new(None),
        }
    }

    /// 模拟上游故障
    pub fn failing() -> Self {
        Self {
            text: None,
            last_request: Mutex::new(None),
        }
    }

    /// 最近一次收到的请求
    pub fn last_request(&self) -> Option<GenerateTextRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Default for FakeTextGenerator {
    fn default() -> Self {
        Self::new(FAKE_PROMPT)
    }
}

#[async_trait]
impl TextGeneratorPort for FakeTextGenerator {
    async fn generate(&self, request: GenerateTextRequest) -> Result<String, LlmError> {
        tracing::debug!(model = %request.model, "FakeTextGenerator: returning fixed text");

        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request);
        }

        self.text
            .clone()
            .ok_or_else(|| LlmError::ServiceError("fake upstream failure".to_string()))
    }
}
