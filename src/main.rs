//! Akari - 瑜伽课程语音生成后端
//!
//! 启动顺序: 配置 → 日志 → 凭据引导 → 客户端 → HTTP 服务器

use std::sync::Arc;

use akari::application::{FileNaming, TextGeneratorPort, TtsEnginePort, VoiceParams};
use akari::config::{
    bootstrap_credentials, load_config, print_config, AppConfig, LogConfig, ProviderKind,
};
use akari::infrastructure::adapters::{
    FakeTextGenerator, FakeTtsClient, FakeTtsClientConfig, FileAudioStorage, GeminiClient,
    GeminiClientConfig, GoogleTtsClient, GoogleTtsClientConfig, TtsAuth,
};
use akari::infrastructure::http::{AppState, GenerationSettings, HttpServer, ServerConfig};

fn main() -> anyhow::Result<()> {
    // .env 仅用于本地开发，不存在时忽略
    dotenvy::dotenv().ok();

    // 加载配置（优先级：兼容环境变量 > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Akari Yoga backend");
    print_config(&config);

    // 修改进程环境变量，必须在运行时启动其他线程之前完成
    bootstrap_credentials(config.tts.credentials_json.as_deref());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let audio_storage = Arc::new(FileAudioStorage::new(&config.storage.audio_dir).await?);
    let text_generator = build_text_generator(&config)?;
    let tts_engine = build_tts_engine(&config).await?;

    let settings = GenerationSettings {
        model: config.llm.model.clone(),
        voice: VoiceParams {
            language_code: config.tts.language_code.clone(),
            name: config.tts.voice_name.clone(),
            ssml_gender: config.tts.ssml_gender.clone(),
        },
        naming: if config.storage.unique_filenames {
            FileNaming::Unique
        } else {
            FileNaming::Timestamp
        },
    };

    let state = AppState::new(text_generator, tts_engine, audio_storage, settings);
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        &config.server.public_dir,
    );
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},akari={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 缺少 API Key 时返回 None，prompt 接口对每个请求返回 500
fn build_text_generator(config: &AppConfig) -> anyhow::Result<Option<Arc<dyn TextGeneratorPort>>> {
    if config.llm.provider == ProviderKind::Fake {
        tracing::warn!("Using fake text generator");
        let generator: Arc<dyn TextGeneratorPort> = Arc::new(FakeTextGenerator::default());
        return Ok(Some(generator));
    }

    let Some(api_key) = config.llm.api_key.as_deref().filter(|k| !k.is_empty()) else {
        tracing::error!("GEMINI_API_KEY not found. Text generation will fail.");
        return Ok(None);
    };

    let client_config = GeminiClientConfig::new(api_key)
        .with_base_url(&config.llm.base_url)
        .with_timeout(config.llm.timeout_secs);
    let generator: Arc<dyn TextGeneratorPort> = Arc::new(GeminiClient::new(client_config)?);
    Ok(Some(generator))
}

async fn build_tts_engine(config: &AppConfig) -> anyhow::Result<Arc<dyn TtsEnginePort>> {
    if config.tts.provider == ProviderKind::Fake {
        tracing::warn!("Using fake TTS client");
        let fake_config = FakeTtsClientConfig {
            audio_file_path: config.tts.fake_audio_path.clone(),
            latency_ms: config.tts.fake_latency_ms,
        };
        let client: Arc<dyn TtsEnginePort> = Arc::new(FakeTtsClient::new(fake_config)?);
        return Ok(client);
    }

    let auth = TtsAuth::resolve(config.tts.api_key.as_deref()).await;
    let client_config = GoogleTtsClientConfig::new(auth)
        .with_base_url(&config.tts.base_url)
        .with_timeout(config.tts.timeout_secs);
    let client: Arc<dyn TtsEnginePort> = Arc::new(GoogleTtsClient::new(client_config)?);
    Ok(client)
}
