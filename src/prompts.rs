use crate::models::AGENCIES;

pub fn exchange_rate(from: &str, to: &str) -> String {
    format!(
        "Get the latest live exchange rate from 1 {from} to {to} using Google Search.
Return a JSON object strictly adhering to this structure:
{{
  \"rate\": 0.00,
  \"explanation\": \"Brief confirmation text with date and source.\"
}}
Ensure \"rate\" is a number."
    )
}

pub fn global_news() -> String {
    let agencies = match AGENCIES.split_last() {
        Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
        None => String::new(),
    };
    format!(
        "Find the latest key financial decisions and news from {agencies}.
Summarize 6 distinct key stories (one for each if possible or mix).
For each story, provide a title, the agency involved, and a brief 2-sentence summary.
Format the output strictly as a valid JSON array of objects: [{{ \"title\": \"...\", \"agency\": \"...\", \"summary\": \"...\", \"topic\": \"...\" }}]"
    )
}

pub fn location_context(latitude: f64, longitude: f64) -> String {
    format!(
        "Identify the city, country, and economic region for these coordinates: {latitude}, {longitude}."
    )
}

pub fn local_news(location: &str) -> String {
    format!(
        "Search for the latest financial and economic news specifically for {location}.
Focus on regional markets, central bank decisions, or trade updates.
Return 3 distinct items in a strict JSON array format: [{{ \"title\": \"...\", \"agency\": \"Local/Regional\", \"summary\": \"...\", \"topic\": \"...\" }}]"
    )
}

pub fn topic_explanation(topic: &str, agency: &str) -> String {
    format!(
        "Write a formal, detailed explanation (about 150 words) regarding the recent financial topic: \"{topic}\" involving {agency}. Explain the implications for the global economy."
    )
}

pub fn news_image(topic: &str) -> String {
    format!(
        "A professional, high-quality, photorealistic editorial illustration for financial news about: {topic}.
Formal style, cinematic lighting, corporate aesthetic. No text overlays."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation() {
        assert!(exchange_rate("USD", "INR").contains("from 1 USD to INR"));
        assert!(global_news().contains("World Bank, IMF, SAARC, BRICS, ASEAN, and UNO."));
        assert!(location_context(18.52, 73.85).contains("18.52, 73.85."));
        assert!(local_news("Pune, India").contains("specifically for Pune, India."));
        assert!(topic_explanation("Rate cut", "IMF").contains("\"Rate cut\" involving IMF."));
        assert!(news_image("Gold rally").contains("about: Gold rally."));
    }
}
