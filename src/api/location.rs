use tracing::{info, instrument, warn};

use crate::{
    client::Gemini,
    http::{GenerateContent, GenerateRequest},
    mapping::{self, UNKNOWN_REGION},
    models::RegionalBriefing,
    prompts,
};

impl Gemini {
    /// Free-text label ("city, country, region") for a coordinate pair,
    /// resolved with maps grounding.
    ///
    /// An empty reply gives `Unknown Location`; a failed call gives
    /// `Unknown Region`.
    #[instrument(skip(self))]
    pub async fn location_context(&self, latitude: f64, longitude: f64) -> String {
        let req = GenerateRequest::text(prompts::location_context(latitude, longitude))
            .maps_at(latitude, longitude);

        match self.generate(req).await {
            Ok(res) => {
                let label = mapping::location_label(&res).into_inner();
                info!(%label, "Location resolved");
                label
            }
            Err(e) => {
                warn!("Location context error: {}", e);
                UNKNOWN_REGION.to_string()
            }
        }
    }

    /// Resolves the location, then fetches its local news. Never fails; either
    /// half may come back as its fallback.
    #[instrument(skip(self))]
    pub async fn regional_briefing(&self, latitude: f64, longitude: f64) -> RegionalBriefing {
        let location = self.location_context(latitude, longitude).await;
        let items = self.local_news(&location).await;

        RegionalBriefing { location, items }
    }
}
