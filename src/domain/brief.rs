//! Yoga Brief - 课程描述生成的输入
//!
//! mood 和 style 不做任何校验，原样嵌入到指令模板中。

use serde::{Deserialize, Serialize};

/// 一次描述生成请求的情绪与主题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaBrief {
    pub mood: String,
    pub style: String,
}

impl YogaBrief {
    pub fn new(mood: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            style: style.into(),
        }
    }

    /// 构建发送给文本生成服务的指令
    pub fn instruction(&self) -> String {
        format!(
            "Create a short, calming, descriptive paragraph for a yoga class. \
             The mood is '{}' and the theme is '{}'. \
             The text will be read by an AI voice. Keep it to 2-3 sentences.",
            self.mood, self.style
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_embeds_mood_and_style() {
        let brief = YogaBrief::new("serene", "ocean waves");
        let instruction = brief.instruction();

        assert!(instruction.starts_with("Create a short, calming, descriptive paragraph"));
        assert!(instruction.contains("The mood is 'serene'"));
        assert!(instruction.contains("the theme is 'ocean waves'"));
        assert!(instruction.ends_with("Keep it to 2-3 sentences."));
    }

    #[test]
    fn test_instruction_with_empty_fields() {
        let instruction = YogaBrief::default().instruction();
        assert!(instruction.contains("The mood is '' and the theme is ''"));
    }
}
