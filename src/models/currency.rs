use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl Currency {
    const fn new(code: &'static str, name: &'static str, flag: &'static str) -> Self {
        Self { code, name, flag }
    }

    /// Case-insensitive lookup in [`CURRENCIES`].
    pub fn find(code: impl AsRef<str>) -> Option<&'static Currency> {
        let code = code.as_ref().trim();
        CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Label used by currency pickers, e.g. `🇺🇸 USD - United States Dollar`.
    pub fn label(&self) -> String {
        format!("{} {} - {}", self.flag, self.code, self.name)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

pub static CURRENCIES: [Currency; 20] = [
    Currency::new("USD", "United States Dollar", "🇺🇸"),
    Currency::new("EUR", "Euro", "🇪🇺"),
    Currency::new("GBP", "British Pound Sterling", "🇬🇧"),
    Currency::new("JPY", "Japanese Yen", "🇯🇵"),
    Currency::new("CNY", "Chinese Yuan", "🇨🇳"),
    Currency::new("INR", "Indian Rupee", "🇮🇳"),
    Currency::new("AUD", "Australian Dollar", "🇦🇺"),
    Currency::new("CAD", "Canadian Dollar", "🇨🇦"),
    Currency::new("CHF", "Swiss Franc", "🇨🇭"),
    Currency::new("HKD", "Hong Kong Dollar", "🇭🇰"),
    Currency::new("SGD", "Singapore Dollar", "🇸🇬"),
    Currency::new("SEK", "Swedish Krona", "🇸🇪"),
    Currency::new("KRW", "South Korean Won", "🇰🇷"),
    Currency::new("BRL", "Brazilian Real", "🇧🇷"),
    Currency::new("RUB", "Russian Ruble", "🇷🇺"),
    Currency::new("ZAR", "South African Rand", "🇿🇦"),
    Currency::new("MXN", "Mexican Peso", "🇲🇽"),
    Currency::new("SAR", "Saudi Riyal", "🇸🇦"),
    Currency::new("AED", "United Arab Emirates Dirham", "🇦🇪"),
    Currency::new("TRY", "Turkish Lira", "🇹🇷"),
];

/// Default pair offered by a converter: the first two entries.
pub fn default_pair() -> (&'static Currency, &'static Currency) {
    (&CURRENCIES[0], &CURRENCIES[1])
}

/// Agencies the global news digest asks about.
pub const AGENCIES: [&str; 6] = ["World Bank", "IMF", "SAARC", "BRICS", "ASEAN", "UNO"];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_codes_unique() {
        assert_eq!(CURRENCIES.iter().map(|c| c.code).unique().count(), 20);
        assert!(CURRENCIES.iter().all(|c| c.code.len() == 3));
    }

    #[test]
    fn test_find() {
        assert_eq!(Currency::find("jpy").map(|c| c.name), Some("Japanese Yen"));
        assert_eq!(Currency::find(" TRY ").map(|c| c.flag), Some("🇹🇷"));
        assert!(Currency::find("PLN").is_none());
    }

    #[test]
    fn test_default_pair_and_label() {
        let (from, to) = default_pair();
        assert_eq!((from.code, to.code), ("USD", "EUR"));
        assert_eq!(to.label(), "🇪🇺 EUR - Euro");
        assert_eq!(from.to_string(), "USD");
    }
}
