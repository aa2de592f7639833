//! LLM Adapter - 文本生成客户端实现

mod fake_text_generator;
mod gemini_client;

pub use fake_text_generator::{FakeTextGenerator, FAKE_PROMPT};
pub use gemini_client::*;
