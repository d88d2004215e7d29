use serde_json::Value;

/// Salvages a JSON value out of free-form model text.
///
/// Markdown fences are stripped, then everything between the first opening
/// bracket and the *last* matching closing bracket is parsed. Text with no
/// bracket at all is parsed as a whole. Any parse failure yields `None`.
///
/// Stray brackets in the surrounding prose are not guarded against. A `{` in a
/// preamble shifts the slice start and the parse fails.
pub fn extract_json(text: &str) -> Option<Value> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let candidate = match cleaned.find(['[', '{']) {
        Some(start) => {
            let close = if cleaned[start..].starts_with('[') {
                ']'
            } else {
                '}'
            };
            match cleaned.rfind(close) {
                Some(end) if end >= start => &cleaned[start..=end],
                // closing char only appears before the opening one: the
                // bounds swap and the text between the two is parsed
                Some(end) => &cleaned[end + 1..start],
                None => cleaned,
            }
        }
        None => cleaned,
    };

    serde_json::from_str(candidate).ok()
}

/// Same as [`extract_json`] but only accepts an object.
pub fn extract_object(text: &str) -> Option<serde_json::Map<String, Value>> {
    match extract_json(text)? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Same as [`extract_json`] but only accepts an array.
pub fn extract_array(text: &str) -> Option<Vec<Value>> {
    match extract_json(text)? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}
