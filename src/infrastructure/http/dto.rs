//! Data Transfer Objects
//!
//! 字段名与前端约定保持一致（camelCase）

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Prompt DTOs
// ============================================================================

/// POST /api/generate-prompt 请求体
///
/// 字段不做类型校验：缺失或 null 视为空字符串，字符串原样使用，其他值取其 JSON 文本
#[derive(Debug, Default, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub mood: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
}

impl PromptRequest {
    pub fn mood_text(&self) -> String {
        field_text(self.mood.as_ref())
    }

    pub fn style_text(&self) -> String {
        field_text(self.style.as_ref())
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

// ============================================================================
// Audio DTOs
// ============================================================================

/// POST /api/generate-audio 请求体
#[derive(Debug, Default, Deserialize)]
pub struct AudioRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioResponse {
    pub audio_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_request_missing_fields() {
        let req: PromptRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.mood_text(), "");
        assert_eq!(req.style_text(), "");
    }

    #[test]
    fn test_prompt_request_accepts_any_json_value() {
        let req: PromptRequest =
            serde_json::from_str(r#"{"mood":null,"style":5}"#).unwrap();
        assert_eq!(req.mood_text(), "");
        assert_eq!(req.style_text(), "5");

        let req: PromptRequest =
            serde_json::from_str(r#"{"mood":"calm","style":["sea","sky"]}"#).unwrap();
        assert_eq!(req.mood_text(), "calm");
        assert_eq!(req.style_text(), r#"["sea","sky"]"#);
    }

    #[test]
    fn test_audio_response_is_camel_case() {
        let json = serde_json::to_value(AudioResponse {
            audio_url: "/audio/akari_audio_1.mp3".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"audioUrl": "/audio/akari_audio_1.mp3"}));
    }
}
