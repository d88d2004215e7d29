use tracing::{debug, info, instrument, warn};

use crate::{
    client::Gemini,
    http::{GenerateContent, GenerateRequest},
    mapping,
    models::{NewsItem, NewsScope},
    prompts,
};

impl Gemini {
    /// Digest of recent decisions by the tracked agencies. Empty on any failure.
    #[instrument(skip(self))]
    pub async fn global_news(&self) -> Vec<NewsItem> {
        let req = GenerateRequest::text(prompts::global_news()).web_search();
        self.news(req, NewsScope::Global).await
    }

    /// Regional stories for a location label. Every item carries the
    /// `Regional News` agency. Empty on any failure.
    #[instrument(skip(self))]
    pub async fn local_news(&self, location: &str) -> Vec<NewsItem> {
        let req = GenerateRequest::text(prompts::local_news(location)).web_search();
        self.news(req, NewsScope::Local).await
    }

    async fn news(&self, req: GenerateRequest, scope: NewsScope) -> Vec<NewsItem> {
        let res = match self.generate(req).await {
            Ok(res) => res,
            Err(e) => {
                warn!(%scope, "News fetch error: {}", e);
                return Vec::new();
            }
        };

        let mapped = mapping::news_items(&res, scope);
        if mapped.is_fallback() {
            debug!(%scope, "No JSON array in news reply");
        }
        let items = mapped.into_inner();
        info!(%scope, count = items.len(), "News fetched");

        items
    }
}
