//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 兼容环境变量（`PORT`、`GEMINI_API_KEY`、`GOOGLE_APPLICATION_CREDENTIALS_JSON`）
//! 2. 环境变量（前缀 `AKARI_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, ProviderKind};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 部署平台常用的环境变量
pub const PORT_ENV: &str = "PORT";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const CREDENTIALS_JSON_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS_JSON";

/// 加载应用配置
///
/// # 环境变量示例
/// - `AKARI_SERVER__PORT=8080`
/// - `AKARI_LLM__MODEL=gemini-1.5-pro`
/// - `AKARI_STORAGE__AUDIO_DIR=/data/audio`
/// - `PORT=8080`、`GEMINI_API_KEY=...`（兼容写法，优先级最高）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_with(None, |name| std::env::var(name).ok())
}

/// 从指定路径加载配置
///
/// `lookup` 用于读取兼容环境变量，便于测试注入
pub fn load_config_with<F>(config_path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.public_dir", "public")?
        .set_default("llm.model", "gemini-1.5-flash")?
        .set_default("tts.language_code", "en-US")?
        .set_default("tts.voice_name", "en-US-Wavenet-F")?
        .set_default("tts.ssml_gender", "FEMALE")?
        .set_default(
            "storage.audio_dir",
            super::types::default_audio_dir().to_string_lossy().to_string(),
        )?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，例如 AKARI_TTS__VOICE_NAME=en-US-Wavenet-C
    builder = builder.add_source(
        Environment::with_prefix("AKARI")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 兼容环境变量
    builder = apply_legacy_env(builder, &lookup)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn apply_legacy_env<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: &F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup(PORT_ENV).filter(|v| !v.is_empty()) {
        Some(raw) => Some(raw.parse::<u16>().map_err(|_| {
            ConfigError::ValidationError(format!("{} is not a valid port: {}", PORT_ENV, raw))
        })? as i64),
        None => None,
    };

    Ok(builder
        .set_override_option("server.port", port)?
        .set_override_option("llm.api_key", lookup(GEMINI_API_KEY_ENV))?
        .set_override_option("tts.credentials_json", lookup(CREDENTIALS_JSON_ENV))?)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.llm.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM model cannot be empty".to_string(),
        ));
    }

    if config.llm.base_url.is_empty() || config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.language_code.is_empty() || config.tts.voice_name.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS voice parameters cannot be empty".to_string(),
        ));
    }

    // fake provider 不需要 API Key
    if config.llm.provider == ProviderKind::Google
        && config.llm.require_api_key
        && !config.llm.has_api_key()
    {
        return Err(ConfigError::ValidationError(format!(
            "{} is required but not set",
            GEMINI_API_KEY_ENV
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不输出密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Directory: {:?}", config.server.public_dir);
    tracing::info!("LLM Provider: {:?}", config.llm.provider);
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!("LLM API Key: {}", if config.llm.has_api_key() { "set" } else { "not set" });
    tracing::info!("TTS Provider: {:?}", config.tts.provider);
    tracing::info!(
        "TTS Voice: {} / {} / {}",
        config.tts.language_code,
        config.tts.voice_name,
        config.tts.ssml_gender
    );
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Unique Filenames: {}", config.storage.unique_filenames);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_voice() {
        let mut config = AppConfig::default();
        config.tts.voice_name = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_require_api_key_without_key_fails() {
        let mut config = AppConfig::default();
        config.llm.require_api_key = true;
        assert!(validate_config(&config).is_err());

        config.llm.api_key = Some("secret".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_require_api_key_ignored_for_fake_provider() {
        let mut config = AppConfig::default();
        config.llm.require_api_key = true;
        config.llm.provider = ProviderKind::Fake;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_fake_tts_options() {
        let (_dir, path) = write_config(
            r#"
            [tts]
            provider = "fake"
            fake_audio_path = "/srv/akari/sample.mp3"
            fake_latency_ms = 250
            "#,
        );

        let config = load_config_with(Some(&path), lookup_from(&[])).unwrap();
        assert_eq!(config.tts.provider, ProviderKind::Fake);
        assert_eq!(
            config.tts.fake_audio_path.as_deref(),
            Some(Path::new("/srv/akari/sample.mp3"))
        );
        assert_eq!(config.tts.fake_latency_ms, 250);
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(
            r#"
            [server]
            port = 8088

            [tts]
            voice_name = "en-US-Wavenet-C"
            "#,
        );

        let config = load_config_with(Some(&path), lookup_from(&[])).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.tts.voice_name, "en-US-Wavenet-C");
        assert_eq!(config.tts.language_code, "en-US");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_legacy_env_overrides_file() {
        let (_dir, path) = write_config("[server]\nport = 8088\n");

        let config = load_config_with(
            Some(&path),
            lookup_from(&[
                ("PORT", "9090"),
                ("GEMINI_API_KEY", "gemini-key"),
                ("GOOGLE_APPLICATION_CREDENTIALS_JSON", "{\"type\":\"service_account\"}"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.llm.api_key.as_deref(), Some("gemini-key"));
        assert_eq!(
            config.tts.credentials_json.as_deref(),
            Some("{\"type\":\"service_account\"}")
        );
    }

    #[test]
    fn test_invalid_port_env_is_rejected() {
        let (_dir, path) = write_config("");
        let result = load_config_with(Some(&path), lookup_from(&[("PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
