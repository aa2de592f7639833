//! HTTP Routes
//!
//! API Endpoints:
//! - /api/generate-prompt   POST  生成课程描述文本
//! - /api/generate-audio    POST  合成语音并返回音频 URL
//! - /api/ping              GET   健康检查
//! - /audio/*               GET   已生成的音频文件
//! - /*                     GET   前端静态资源，未命中时返回 index.html
//!
//! 对仅支持 POST 的 API 路径发起 GET 时同样返回 index.html

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use super::handlers;
use super::state::AppState;
use crate::domain::AUDIO_MOUNT_PATH;

/// 前端入口文档
pub const INDEX_FILE: &str = "index.html";

/// 创建所有路由
pub fn create_routes(audio_dir: &Path, public_dir: &Path) -> Router<Arc<AppState>> {
    let frontend =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join(INDEX_FILE)));

    Router::new()
        .nest("/api", api_routes(frontend.clone()))
        .nest_service(AUDIO_MOUNT_PATH, ServeDir::new(audio_dir))
        .fallback_service(frontend)
}

/// API 路由
fn api_routes(frontend: ServeDir<ServeFile>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/generate-prompt",
            post(handlers::generate_prompt).fallback_service(frontend.clone()),
        )
        .route(
            "/generate-audio",
            post(handlers::generate_audio).fallback_service(frontend),
        )
}
