//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait。所有文件平铺在同一目录下，该目录同时挂载到 /audio。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort};
use crate::domain::AudioFileName;

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储，目录不存在时自动创建
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn save_audio(
        &self,
        name: &AudioFileName,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError> {
        let audio_path = self.audio_path(name);

        fs::write(&audio_path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!("Saved audio: file={}, size={} bytes", name, data.len());

        Ok(audio_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_audio() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();
        let name = AudioFileName::timestamped(1_700_000_000_000);

        let path = storage.save_audio(&name, b"fake mp3 data").await.unwrap();
        assert_eq!(path, temp_dir.path().join("akari_audio_1700000000000.mp3"));
        assert_eq!(std::fs::read(&path).unwrap(), b"fake mp3 data");
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("tmp").join("akari_audio");

        let storage = FileAudioStorage::new(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.base_dir(), nested.as_path());
    }

    #[tokio::test]
    async fn test_save_into_removed_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().join("audio");
        let storage = FileAudioStorage::new(&base).await.unwrap();
        std::fs::remove_dir_all(&base).unwrap();

        let result = storage
            .save_audio(&AudioFileName::timestamped(1), b"data")
            .await;
        assert!(matches!(result, Err(AudioStorageError::IoError(_))));
    }

    /// 同一毫秒生成的文件名相同，后一次写入覆盖前一次（现有行为）
    #[tokio::test]
    async fn test_same_timestamp_overwrites() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let first = AudioFileName::timestamped(1_700_000_000_500);
        let second = AudioFileName::timestamped(1_700_000_000_500);

        let first_path = storage.save_audio(&first, b"first clip").await.unwrap();
        let second_path = storage.save_audio(&second, b"second").await.unwrap();

        assert_eq!(first_path, second_path);
        assert_eq!(std::fs::read(&first_path).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
