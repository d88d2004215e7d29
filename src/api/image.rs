use tracing::{debug, instrument, warn};

use crate::{
    client::Gemini,
    http::{GenerateContent, GenerateRequest},
    mapping,
    models::ImageResolution,
    prompts,
};

impl Gemini {
    /// Editorial illustration for a topic as a `data:image/png;base64,...` URI.
    /// `None` when the model returned no image or the call failed.
    #[instrument(skip(self))]
    pub async fn news_image(&self, topic: &str, resolution: ImageResolution) -> Option<String> {
        let req = GenerateRequest::image(prompts::news_image(topic), resolution);

        let res = match self.generate(req).await {
            Ok(res) => res,
            Err(e) => {
                warn!("Image generation error: {}", e);
                return None;
            }
        };

        let mapped = mapping::inline_image(&res);
        if mapped.is_fallback() {
            debug!("Image reply carried no inline data");
        }
        mapped.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use crate::{client::Gemini, models::ImageResolution};
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/v1beta/models/gemini-3-pro-image-preview:generateContent";

    fn client(server: &MockServer) -> Gemini {
        Gemini::builder()
            .api_key("test-key")
            .base_url(server.base_url())
            .build()
    }

    #[tokio::test]
    async fn test_news_image() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(PATH).body_includes("\"imageSize\":\"2K\"");
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [
                        { "text": "Here is your image." },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                    ] } }]
                }));
            })
            .await;

        let image = client(&server)
            .news_image("BRICS summit", ImageResolution::TwoK)
            .await;

        mock.assert_async().await;
        assert_eq!(image.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));
    }

    #[tokio::test]
    async fn test_news_image_absent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that." }] } }]
                }));
            })
            .await;
        assert!(client(&server)
            .news_image("x", ImageResolution::OneK)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_news_image_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(404).body("model not found");
            })
            .await;
        assert!(client(&server)
            .news_image("x", ImageResolution::FourK)
            .await
            .is_none());
    }
}
