use bon::Builder;
use tracing::debug;

use crate::{
    error::ClientError,
    paths::{API_KEY_ENV, BASE_URL, BASE_URL_ENV, IMAGE_MODEL, LEGACY_API_KEY_ENV, TEXT_MODEL},
};

/// Gemini API client. Cheap to clone; holds no mutable state, so concurrent
/// operations on clones never coordinate.
#[derive(Clone, Builder)]
pub struct Gemini {
    #[builder(into)]
    pub(crate) api_key: String,
    #[builder(into, default = BASE_URL.to_string())]
    pub(crate) base_url: String,
    #[builder(into, default = TEXT_MODEL.to_string())]
    pub(crate) text_model: String,
    #[builder(into, default = IMAGE_MODEL.to_string())]
    pub(crate) image_model: String,
    #[builder(default = reqwest::Client::new())]
    pub(crate) http_client: reqwest::Client,
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl Gemini {
    pub fn load_from_env() -> Result<Self, ClientError> {
        let api_key = resolve_api_key(|name| std::env::var(name).ok())?;

        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| BASE_URL.to_string());
        debug!("Using Gemini endpoint {}", base_url);

        let http_client = reqwest::ClientBuilder::new()
            .build()
            .map_err(ClientError::RequestError)?;

        Ok(Self::builder()
            .api_key(api_key)
            .base_url(base_url)
            .http_client(http_client)
            .build())
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }
}

/// First non-blank of `GEMINI_API_KEY` and `API_KEY`.
fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ClientError> {
    [API_KEY_ENV, LEGACY_API_KEY_ENV]
        .into_iter()
        .find_map(|name| lookup(name).filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| {
            ClientError::MissingCredentials(format!("{API_KEY_ENV} environment variable not set"))
        })
}
