//! Audio Storage Port - 出站端口
//!
//! 定义生成音频文件存储的抽象接口。文件写入后不再修改，也不会被本服务删除。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::AudioFileName;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Storage Port - 出站端口
///
/// 读取由 /audio 静态目录直接提供，端口只负责写入
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 存储根目录（同时作为 /audio 的静态目录）
    fn base_dir(&self) -> &Path;

    /// 获取音频文件路径
    fn audio_path(&self, name: &AudioFileName) -> PathBuf {
        self.base_dir().join(name.as_str())
    }

    /// 保存音频数据，同名文件直接覆盖
    async fn save_audio(
        &self,
        name: &AudioFileName,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError>;
}
