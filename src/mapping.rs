//! Shapes a [`ModelResponse`] into the crate's domain types.
//!
//! Every mapper is total: missing or malformed fields are replaced with
//! defaults and the result is tagged [`Mapped::Fallback`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, TimeZone};
use itertools::Itertools;
use serde_json::{Map, Value};

use crate::{
    extract::{extract_array, extract_object},
    models::{ExchangeRateResult, ModelResponse, NewsItem, NewsScope},
};

pub const DEFAULT_RATE_SOURCE: &str = "Google Search";
pub const RATE_DETAILS_FALLBACK: &str = "Rate fetched via Search.";
pub const LOCAL_AGENCY: &str = "Regional News";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNKNOWN_REGION: &str = "Unknown Region";
pub const NO_EXPLANATION: &str = "No explanation available.";
pub const EXPLANATION_FAILED: &str = "Could not generate explanation.";

const LAST_UPDATED_FORMAT: &str = "%-I:%M:%S %p";

/// A mapped value, tagged with whether it came from the model or from defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped<T> {
    Parsed(T),
    Fallback(T),
}

impl<T> Mapped<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Parsed(v) | Self::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

pub fn exchange_rate<Tz>(res: &ModelResponse, now: DateTime<Tz>) -> Mapped<ExchangeRateResult>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let data = extract_object(&res.text);

    let rate = data
        .as_ref()
        .and_then(|d| d.get("rate"))
        .and_then(Value::as_f64)
        .filter(|r| r.is_finite() && *r >= 0.0)
        .unwrap_or(0.0);

    let details = data
        .as_ref()
        .and_then(|d| non_empty_str(d, "explanation"))
        .map(str::to_string)
        .or_else(|| (!res.text.is_empty()).then(|| res.text.clone()))
        .unwrap_or_else(|| RATE_DETAILS_FALLBACK.to_string());

    let source = res.citations.iter().filter_map(|c| c.label()).join(", ");
    let source = if source.is_empty() {
        DEFAULT_RATE_SOURCE.to_string()
    } else {
        source
    };

    let result = ExchangeRateResult {
        rate,
        last_updated: now.format(LAST_UPDATED_FORMAT).to_string(),
        source,
        details,
    };

    if data.is_some() {
        Mapped::Parsed(result)
    } else {
        Mapped::Fallback(result)
    }
}

pub fn news_items(res: &ModelResponse, scope: NewsScope) -> Mapped<Vec<NewsItem>> {
    let Some(elements) = extract_array(&res.text) else {
        return Mapped::Fallback(Vec::new());
    };

    let locators = res
        .citations
        .iter()
        .filter_map(|c| c.locator())
        .collect::<Vec<_>>();

    let items = elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let empty = Map::new();
            let fields = element.as_object().unwrap_or(&empty);
            let field = |key: &str| non_empty_str(fields, key).unwrap_or_default().to_string();

            let agency = match scope {
                NewsScope::Local => LOCAL_AGENCY.to_string(),
                NewsScope::Global => field("agency"),
            };

            NewsItem {
                id: scope.item_id(i),
                title: field("title"),
                summary: field("summary"),
                agency,
                topic: field("topic"),
                source_url: (!locators.is_empty())
                    .then(|| locators[i % locators.len()].to_string()),
                generated_image: None,
            }
        })
        .collect();

    Mapped::Parsed(items)
}

pub fn location_label(res: &ModelResponse) -> Mapped<String> {
    if res.text.is_empty() {
        Mapped::Fallback(UNKNOWN_LOCATION.to_string())
    } else {
        Mapped::Parsed(res.text.clone())
    }
}

pub fn explanation(res: &ModelResponse) -> Mapped<String> {
    if res.text.is_empty() {
        Mapped::Fallback(NO_EXPLANATION.to_string())
    } else {
        Mapped::Parsed(res.text.clone())
    }
}

/// First inline binary part as a PNG `data:` URI.
pub fn inline_image(res: &ModelResponse) -> Mapped<Option<String>> {
    match res.inline_parts.first() {
        Some(part) => Mapped::Parsed(Some(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(&part.data)
        ))),
        None => Mapped::Fallback(None),
    }
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}
