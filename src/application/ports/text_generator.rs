//! Text Generator Port - 文本生成服务抽象
//!
//! 具体实现在 infrastructure/adapters/llm

use async_trait::async_trait;
use thiserror::Error;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 文本生成请求
#[derive(Debug, Clone)]
pub struct GenerateTextRequest {
    /// 模型标识
    pub model: String,
    /// 完整指令
    pub instruction: String,
}

/// Text Generator Port
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// 提交指令并返回第一个候选结果的文本
    async fn generate(&self, request: GenerateTextRequest) -> Result<String, LlmError>;
}
