use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResult {
    /// Units of the target currency per one unit of the source; `0.0` means unknown.
    pub rate: f64,
    pub last_updated: String,
    pub source: String,
    pub details: String,
}

impl ExchangeRateResult {
    pub fn is_known(&self) -> bool {
        self.rate > 0.0
    }

    /// Converts `amount` at this rate, or `None` while the rate is unknown.
    pub fn convert(&self, amount: f64) -> Option<f64> {
        self.is_known().then(|| amount * self.rate)
    }
}
