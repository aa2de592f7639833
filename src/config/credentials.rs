//! Credential Bootstrap
//!
//! 部分托管环境无法挂载凭据文件，只能通过环境变量传入服务账号 JSON。
//! 启动时将其写入临时目录，并让 Google 客户端库通过
//! `GOOGLE_APPLICATION_CREDENTIALS` 找到该文件。

use std::io;
use std::path::{Path, PathBuf};

/// Google 客户端库读取的凭据路径变量
pub const APPLICATION_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// 临时凭据文件名
pub const CREDENTIALS_FILE_NAME: &str = "gcloud-credentials.json";

/// 将原始凭据写入 `dir` 下的固定文件，返回文件路径
pub fn write_credentials_file(dir: &Path, raw_json: &str) -> io::Result<PathBuf> {
    let path = dir.join(CREDENTIALS_FILE_NAME);
    std::fs::write(&path, raw_json)?;
    Ok(path)
}

/// 执行凭据引导
///
/// 写入失败只记录日志并继续，下游客户端初始化可能随后失败。
/// 会修改进程环境变量，必须在启动异步运行时、构建任何客户端之前调用一次。
pub fn bootstrap_credentials(raw_json: Option<&str>) -> Option<PathBuf> {
    bootstrap_credentials_in(&std::env::temp_dir(), raw_json)
}

/// 同 [`bootstrap_credentials`]，凭据文件写入 `dir`
pub fn bootstrap_credentials_in(dir: &Path, raw_json: Option<&str>) -> Option<PathBuf> {
    let raw_json = raw_json.filter(|s| !s.is_empty())?;

    match write_credentials_file(dir, raw_json) {
        Ok(path) => {
            std::env::set_var(APPLICATION_CREDENTIALS_ENV, &path);
            tracing::info!(path = %path.display(), "Wrote temporary credentials file");
            Some(path)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to write temporary credentials file");
            None
        }
    }
}
