use chrono::Local;
use tracing::{debug, error, info, instrument};

use crate::{
    client::Gemini,
    error::ClientError,
    http::{GenerateContent, GenerateRequest},
    mapping,
    models::ExchangeRateResult,
    prompts,
};

impl Gemini {
    /// Live rate for one unit of `from` in `to`, grounded with web search.
    ///
    /// Unlike the other operations this one fails loudly: any invocation error
    /// becomes [`ClientError::RateUnavailable`]. A reply without usable JSON is
    /// not an error and yields a zero rate.
    #[instrument(skip(self))]
    pub async fn exchange_rate(
        &self,
        from: impl AsRef<str> + std::fmt::Debug,
        to: impl AsRef<str> + std::fmt::Debug,
    ) -> Result<ExchangeRateResult, ClientError> {
        let req = GenerateRequest::text(prompts::exchange_rate(from.as_ref(), to.as_ref()))
            .web_search();

        let res = self.generate(req).await.map_err(|e| {
            error!("Exchange rate fetch error: {}", e);
            ClientError::rate_unavailable(e)
        })?;

        let mapped = mapping::exchange_rate(&res, Local::now());
        if mapped.is_fallback() {
            debug!("No JSON object in exchange rate reply, using defaults");
        }
        let result = mapped.into_inner();
        info!(rate = result.rate, "Exchange rate fetched");

        Ok(result)
    }
}
