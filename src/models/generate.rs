//! Wire types for the `generateContent` endpoint and the flattened
//! [`ModelResponse`] that the mappers consume.

use serde::{Deserialize, Serialize};

use crate::serde_utils::{bytes_from_base64, bytes_to_base64};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlinePart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Binary payload carried inline in a response part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlinePart {
    #[serde(default)]
    pub mime_type: String,
    #[serde(
        deserialize_with = "bytes_from_base64",
        serialize_with = "bytes_to_base64"
    )]
    pub data: Vec<u8>,
}

/// Tool the model may call while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tool {
    #[serde(rename = "googleSearch")]
    WebSearch(Empty),
    #[serde(rename = "googleMaps")]
    Maps(Empty),
}

impl Tool {
    pub fn web_search() -> Self {
        Self::WebSearch(Empty {})
    }

    pub fn maps() -> Self {
        Self::Maps(Empty {})
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
    pub image_size: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<Citation>,
}

/// Attribution the model attached to its answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Citation {
    pub fn new(title: Option<&str>, uri: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            uri: uri.map(str::to_string),
        }
    }

    /// Title if present and non-empty, otherwise the uri.
    pub fn label(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.uri.as_deref()))
    }

    pub fn locator(&self) -> Option<&str> {
        non_empty(self.uri.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// What every operation gets back from one model call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelResponse {
    pub text: String,
    pub citations: Vec<Citation>,
    pub inline_parts: Vec<InlinePart>,
}

impl ModelResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }

    #[must_use]
    pub fn with_inline_parts(mut self, parts: Vec<InlinePart>) -> Self {
        self.inline_parts = parts;
        self
    }
}

impl From<GenerateContentResponse> for ModelResponse {
    fn from(res: GenerateContentResponse) -> Self {
        // only the first candidate is ever looked at
        let Some(candidate) = res.candidates.into_iter().next() else {
            return Self::default();
        };

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        let mut text = String::new();
        let mut inline_parts = Vec::new();
        for part in parts {
            // thought parts add no text but their images still count
            if let Some(t) = part.text.filter(|_| part.thought != Some(true)) {
                text.push_str(&t);
            }
            if let Some(data) = part.inline_data {
                inline_parts.push(data);
            }
        }

        let citations = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .collect();

        Self {
            text,
            citations,
            inline_parts,
        }
    }
}
