//! Prompt Commands

/// 生成课程描述命令
///
/// mood/style 缺失时为空字符串，不做校验
#[derive(Debug, Clone, Default)]
pub struct GeneratePrompt {
    pub mood: String,
    pub style: String,
}

/// 生成结果
#[derive(Debug, Clone)]
pub struct GeneratePromptResponse {
    pub prompt: String,
}
