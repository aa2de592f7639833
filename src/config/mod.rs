//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 部署平台兼容变量（最高优先级）
//! - 环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）
//!
//! 以及启动时的凭据引导。

mod credentials;
mod loader;
mod types;

pub use credentials::{
    bootstrap_credentials, bootstrap_credentials_in, write_credentials_file,
    APPLICATION_CREDENTIALS_ENV, CREDENTIALS_FILE_NAME,
};
pub use loader::{load_config, load_config_with, print_config, ConfigError};
pub use types::{
    AppConfig, LlmConfig, LogConfig, ProviderKind, ServerConfig, StorageConfig, TtsConfig,
};
