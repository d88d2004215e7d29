pub mod api;
pub mod client;
pub mod error;
pub mod extract;
pub mod http;
pub mod liveness;
pub mod mapping;
pub mod models;
pub mod paths;
pub mod prompts;
mod serde_utils;

pub mod prelude {
    pub use crate::client::Gemini;
    pub use crate::error::ClientError;
    pub use crate::liveness::{Liveness, Ticket};
    pub use crate::models::{
        Currency, ExchangeRateResult, ImageResolution, NewsItem, RegionalBriefing, CURRENCIES,
    };
}
