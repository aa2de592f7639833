//! Domain Layer - 领域层
//!
//! - brief: 课程描述（mood/style → 指令模板）
//! - audio_file: 合成文本与音频文件命名

mod audio_file;
mod brief;

pub use audio_file::{
    AudioFileName, SpeechText, AUDIO_FILE_EXTENSION, AUDIO_FILE_PREFIX, AUDIO_MOUNT_PATH,
};
pub use brief::YogaBrief;
