use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Prefix of synthetic news item ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NewsScope {
    Global,
    Local,
}

impl NewsScope {
    pub fn item_id(&self, index: usize) -> String {
        format!("{self}-{index}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub agency: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// `data:` URI attached after an on-demand image generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<String>,
}

impl NewsItem {
    pub fn display_topic(&self) -> &str {
        if self.topic.is_empty() {
            "Finance"
        } else {
            &self.topic
        }
    }

    #[must_use]
    pub fn with_generated_image(mut self, data_uri: impl Into<String>) -> Self {
        self.generated_image = Some(data_uri.into());
        self
    }
}

/// A resolved location label together with its local news.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalBriefing {
    pub location: String,
    pub items: Vec<NewsItem>,
}
