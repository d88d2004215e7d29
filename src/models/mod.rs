mod currency;
mod exchange_rate;
mod generate;
mod image;
mod news;

pub use currency::{default_pair, Currency, AGENCIES, CURRENCIES};
pub use exchange_rate::ExchangeRateResult;
pub use generate::{
    Candidate, Citation, Content, Empty, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, GroundingChunk, GroundingMetadata, ImageConfig, InlinePart, LatLng,
    ModelResponse, Part, RetrievalConfig, Tool, ToolConfig,
};
pub use image::{ImageResolution, NEWS_IMAGE_ASPECT_RATIO};
pub use news::{NewsItem, NewsScope, RegionalBriefing};
