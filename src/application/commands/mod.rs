//! 应用层 - 命令
//!
//! 两个带副作用的用例：生成课程描述、合成语音

mod audio_commands;
mod prompt_commands;

pub mod handlers;

pub use audio_commands::*;
pub use prompt_commands::*;
