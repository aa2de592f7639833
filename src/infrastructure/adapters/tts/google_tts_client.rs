//! Google TTS Client - 调用 Google Cloud Text-to-Speech
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 API:
//! POST {base_url}/text:synthesize
//! Request: {"input": {"text": "..."},
//!           "voice": {"languageCode": "en-US", "name": "en-US-Wavenet-F", "ssmlGender": "FEMALE"},
//!           "audioConfig": {"audioEncoding": "MP3"}}
//! Response: {"audioContent": "<base64>"}

use async_trait::async_trait;
use base64::Engine;
use gcp_auth::TokenProvider;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};

const API_KEY_HEADER: &str = "x-goog-api-key";
const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const AUDIO_ENCODING: &str = "MP3";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechResponse {
    #[serde(default)]
    audio_content: String,
}

/// TTS 鉴权方式
#[derive(Clone)]
pub enum TtsAuth {
    /// API Key
    ApiKey(SecretString),
    /// Application Default Credentials（服务账号等）
    ServiceAccount(Arc<dyn TokenProvider>),
    /// 无凭据，请求将由上游拒绝
    None,
}

impl std::fmt::Debug for TtsAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey"),
            Self::ServiceAccount(_) => f.write_str("ServiceAccount"),
            Self::None => f.write_str("None"),
        }
    }
}

impl TtsAuth {
    /// 优先使用 API Key，否则通过 `GOOGLE_APPLICATION_CREDENTIALS` 等途径查找凭据
    ///
    /// 找不到凭据时不视为致命错误，失败会在每次合成请求时体现
    pub async fn resolve(api_key: Option<&str>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            return Self::ApiKey(SecretString::from(key.to_string()));
        }

        match gcp_auth::provider().await {
            Ok(provider) => {
                tracing::info!("Using Application Default Credentials for TTS");
                Self::ServiceAccount(provider)
            }
            Err(e) => {
                tracing::warn!(error = %e, "No Google credentials found, TTS requests will fail");
                Self::None
            }
        }
    }

    async fn apply(&self, builder: RequestBuilder) -> Result<RequestBuilder, TtsError> {
        match self {
            Self::ApiKey(key) => Ok(builder.header(API_KEY_HEADER, key.expose_secret())),
            Self::ServiceAccount(provider) => {
                let token = provider
                    .token(&[CLOUD_PLATFORM_SCOPE])
                    .await
                    .map_err(|e| TtsError::AuthError(e.to_string()))?;
                Ok(builder.bearer_auth(token.as_str()))
            }
            Self::None => Ok(builder),
        }
    }
}

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 鉴权方式
    pub auth: TtsAuth,
}

impl GoogleTtsClientConfig {
    pub fn new(auth: TtsAuth) -> Self {
        Self {
            base_url: "https://texttospeech.googleapis.com/v1".to_string(),
            timeout_secs: 60,
            auth,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Cloud Text-to-Speech 客户端
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleTtsClientConfig,
}

impl GoogleTtsClient {
    pub fn new(config: GoogleTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn synthesize_url(&self) -> String {
        format!("{}/text:synthesize", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TtsEnginePort for GoogleTtsClient {
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<SynthesizeResponse, TtsError> {
        let body = SynthesizeSpeechRequest {
            input: SynthesisInput {
                text: &request.text,
            },
            voice: VoiceSelection {
                language_code: &request.voice.language_code,
                name: &request.voice.name,
                ssml_gender: &request.voice.ssml_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
            },
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = request.text.len(),
            voice = %request.voice.name,
            "Sending synthesize request"
        );

        let builder = self.client.post(self.synthesize_url()).json(&body);
        let response = self
            .config
            .auth
            .apply(builder)
            .await?
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: SynthesizeSpeechResponse = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let audio_data = base64::engine::general_purpose::STANDARD
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| TtsError::InvalidResponse(format!("Invalid audioContent: {}", e)))?;

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audioContent".to_string()));
        }

        tracing::info!(audio_size = audio_data.len(), "TTS synthesis completed");

        Ok(SynthesizeResponse { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::VoiceParams;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GoogleTtsClient {
        let auth = TtsAuth::ApiKey(SecretString::from("tts-key".to_string()));
        GoogleTtsClient::new(GoogleTtsClientConfig::new(auth).with_base_url(server.uri())).unwrap()
    }

    fn request(text: &str) -> SynthesizeRequest {
        SynthesizeRequest {
            text: text.to_string(),
            voice: VoiceParams::default(),
        }
    }

    #[tokio::test]
    async fn test_synthesize_decodes_audio_content() {
        let server = MockServer::start().await;
        let audio = b"ID3\x03\x00fake-mp3-frames";
        let encoded = base64::engine::general_purpose::STANDARD.encode(audio);

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .and(header("x-goog-api-key", "tts-key"))
            .and(body_json(serde_json::json!({
                "input": {"text": "Relax your jaw."},
                "voice": {"languageCode": "en-US", "name": "en-US-Wavenet-F", "ssmlGender": "FEMALE"},
                "audioConfig": {"audioEncoding": "MP3"}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "audioContent": encoded })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .synthesize(request("Relax your jaw."))
            .await
            .unwrap();
        assert_eq!(response.audio_data, audio);
    }

    #[tokio::test]
    async fn test_error_status_is_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
            .mount(&server)
            .await;

        let result = test_client(&server).synthesize(request("hello")).await;
        assert!(matches!(result, Err(TtsError::ServiceError(msg)) if msg.contains("403")));
    }

    #[tokio::test]
    async fn test_invalid_base64_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "audioContent": "%%%not-base64%%%" })),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).synthesize(request("hello")).await;
        assert!(matches!(result, Err(TtsError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_missing_audio_content_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = test_client(&server).synthesize(request("hello")).await;
        assert!(matches!(result, Err(TtsError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_resolve_prefers_api_key() {
        let auth = TtsAuth::resolve(Some("key")).await;
        assert!(matches!(auth, TtsAuth::ApiKey(_)));
    }
}
