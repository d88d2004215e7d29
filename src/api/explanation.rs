use tracing::{instrument, warn};

use crate::{
    client::Gemini,
    http::{GenerateContent, GenerateRequest},
    mapping::{self, EXPLANATION_FAILED},
    prompts,
};

impl Gemini {
    /// Roughly 150 words on a news topic and the agency behind it.
    #[instrument(skip(self))]
    pub async fn topic_explanation(&self, topic: &str, agency: &str) -> String {
        let req = GenerateRequest::text(prompts::topic_explanation(topic, agency));

        match self.generate(req).await {
            Ok(res) => mapping::explanation(&res).into_inner(),
            Err(e) => {
                warn!("Topic explanation error: {}", e);
                EXPLANATION_FAILED.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        client::Gemini,
        mapping::{EXPLANATION_FAILED, NO_EXPLANATION},
    };
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client(server: &MockServer) -> Gemini {
        Gemini::builder()
            .api_key("test-key")
            .base_url(server.base_url())
            .build()
    }

    #[tokio::test]
    async fn test_topic_explanation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [
                        { "text": "The SAARC currency swap " },
                        { "text": "eases liquidity." }
                    ] } }]
                }));
            })
            .await;

        let text = client(&server)
            .topic_explanation("Currency swap", "SAARC")
            .await;
        assert_eq!(text, "The SAARC currency swap eases liquidity.");
    }

    #[tokio::test]
    async fn test_topic_explanation_fallbacks() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({ "candidates": [{ "content": { "parts": [] } }] }));
            })
            .await;
        assert_eq!(
            client(&server).topic_explanation("x", "IMF").await,
            NO_EXPLANATION
        );

        let failing = MockServer::start_async().await;
        failing
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(401);
            })
            .await;
        assert_eq!(
            client(&failing).topic_explanation("x", "IMF").await,
            EXPLANATION_FAILED
        );
    }
}
