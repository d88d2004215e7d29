use reqwest::{header, Response, StatusCode, Url};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    client::Gemini,
    error::{ApiErrorResponse, ClientError, ResponseError},
    models::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
        ImageResolution, LatLng, ModelResponse, Part, RetrievalConfig, Tool, ToolConfig,
        NEWS_IMAGE_ASPECT_RATIO,
    },
    paths::{API_KEY_HEADER, API_VERSION_PATH, GENERATE_CONTENT_METHOD},
};

/// Model the request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Text,
    Image,
}

/// One outbound model call: prompt plus optional tools and image options.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    model: ModelKind,
    prompt: String,
    tools: Vec<Tool>,
    tool_config: Option<ToolConfig>,
    generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            model: ModelKind::Text,
            prompt: prompt.into(),
            tools: Vec::new(),
            tool_config: None,
            generation_config: None,
        }
    }

    pub fn image(prompt: impl Into<String>, resolution: ImageResolution) -> Self {
        Self {
            model: ModelKind::Image,
            prompt: prompt.into(),
            tools: Vec::new(),
            tool_config: None,
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: NEWS_IMAGE_ASPECT_RATIO.to_string(),
                    image_size: resolution.to_string(),
                },
            }),
        }
    }

    #[must_use]
    pub fn web_search(mut self) -> Self {
        self.tools.push(Tool::web_search());
        self
    }

    /// Maps grounding, anchored at the given coordinates.
    #[must_use]
    pub fn maps_at(mut self, latitude: f64, longitude: f64) -> Self {
        self.tools.push(Tool::maps());
        self.tool_config = Some(ToolConfig {
            retrieval_config: RetrievalConfig {
                lat_lng: LatLng {
                    latitude,
                    longitude,
                },
            },
        });
        self
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub(crate) fn to_wire(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(self.prompt.clone()),
                    ..Default::default()
                }],
            }],
            tools: self.tools.clone(),
            tool_config: self.tool_config,
            generation_config: self.generation_config.clone(),
        }
    }
}

// Extension trait to add model calls to Gemini
#[async_trait::async_trait]
pub trait GenerateContent {
    async fn generate(&self, req: GenerateRequest) -> Result<ModelResponse, ClientError>;
}

#[async_trait::async_trait]
impl GenerateContent for Gemini {
    async fn generate(&self, req: GenerateRequest) -> Result<ModelResponse, ClientError> {
        let res = self.execute_request(&req).await?;
        let body = res.text().await?;
        let body = serde_json::from_str::<GenerateContentResponse>(&body)?;
        Ok(body.into())
    }
}

impl Gemini {
    pub(crate) fn generate_url(&self, model: ModelKind) -> Result<Url, ClientError> {
        let model = match model {
            ModelKind::Text => &self.text_model,
            ModelKind::Image => &self.image_model,
        };

        let mut base = Url::parse(&self.base_url)
            .map_err(|e| ResponseError::invalid(format!("Invalid base url: {e}")))?;
        // without a trailing slash `join` would drop the last path segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base
            .join(API_VERSION_PATH)
            .map_err(|e| ResponseError::invalid(format!("Invalid api path: {e}")))?
            // "./" keeps `model:method` from parsing as a url scheme
            .join(&format!("./{model}:{GENERATE_CONTENT_METHOD}"))
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid model '{model}': {e}")))
    }

    // Single attempt: failures go straight back to the operation.
    #[instrument(skip(self, req), fields(model = ?req.model))]
    async fn execute_request(&self, req: &GenerateRequest) -> Result<Response, ClientError> {
        let url = self.generate_url(req.model)?;
        debug!("Built request URL: {}", url);

        let res = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())
            .json(&req.to_wire())
            .send()
            .await
            .map_err(|e| {
                warn!("Network error occurred: {}", e);
                ClientError::RequestError(e)
            })?;

        if let Err(err) = res.error_for_status_ref() {
            let Some(status) = err.status() else {
                error!("HTTP error without status code: {}", err);
                return Err(ResponseError::invalid(err.to_string()).into());
            };

            if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                warn!("Received {}, API key rejected", status.as_u16());
                return Err(ClientError::Unauthorized);
            }

            error!(
                "Received HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );

            let body_text = res.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&body_text) {
                error!("API error response: {}", error_response);
                return Err(ClientError::ApiError(error_response));
            }

            return Err(ResponseError::http_status(status, body_text).into());
        }

        info!("Model call completed with status: {}", res.status());

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> Gemini {
        Gemini::builder()
            .api_key("test-key")
            .base_url(server.base_url())
            .build()
    }

    #[test]
    fn test_image_request_wire_shape() {
        let req = GenerateRequest::image("a skyline", ImageResolution::FourK);
        assert_eq!(req.model(), ModelKind::Image);
        assert_eq!(
            serde_json::to_value(req.to_wire()).unwrap(),
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "a skyline" }] }],
                "generationConfig": { "imageConfig": { "aspectRatio": "16:9", "imageSize": "4K" } }
            })
        );
    }

    #[test]
    fn test_search_request_wire_shape() {
        let req = GenerateRequest::text("rates?").web_search();
        let wire = serde_json::to_value(req.to_wire()).unwrap();
        assert_eq!(wire["tools"], json!([{ "googleSearch": {} }]));
        assert!(wire.get("toolConfig").is_none());
    }

    #[test]
    fn test_generate_url() {
        let gemini = Gemini::builder()
            .api_key("k")
            .base_url("http://localhost:8080/")
            .build();
        assert_eq!(
            gemini.generate_url(ModelKind::Text).unwrap().as_str(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            gemini.generate_url(ModelKind::Image).unwrap().as_str(),
            "http://localhost:8080/v1beta/models/gemini-3-pro-image-preview:generateContent"
        );
    }

    #[test]
    fn test_generate_url_keeps_base_path() {
        for base in ["https://proxy.internal/gemini", "https://proxy.internal/gemini/"] {
            let gemini = Gemini::builder().api_key("k").base_url(base).build();
            assert_eq!(
                gemini.generate_url(ModelKind::Text).unwrap().as_str(),
                "https://proxy.internal/gemini/v1beta/models/gemini-2.5-flash:generateContent"
            );
        }
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.5-flash:generateContent")
                    .header("x-goog-api-key", "test-key");
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [{ "text": "pong" }] } }]
                }));
            })
            .await;

        let res = client(&server)
            .generate(GenerateRequest::text("ping"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(res.text, "pong");
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("<html>proxy page</html>");
            })
            .await;

        let err = client(&server)
            .generate(GenerateRequest::text("ping"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::SerdeError(_)));
    }

    #[tokio::test]
    async fn test_generate_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(403).body("denied");
            })
            .await;

        let err = client(&server)
            .generate(GenerateRequest::text("ping"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn test_generate_api_error_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(429).json_body(json!({
                    "error": { "code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED" }
                }));
            })
            .await;

        let err = client(&server)
            .generate(GenerateRequest::text("ping"))
            .await
            .unwrap_err();
        match err {
            ClientError::ApiError(api) => assert_eq!(api.error.message, "Quota exceeded"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_generate_plain_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(500).body("boom");
            })
            .await;

        let err = client(&server)
            .generate(GenerateRequest::text("ping"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::ResponseError(ResponseError::HttpStatus { body, .. }) if body == "boom"
        ));
    }
}
