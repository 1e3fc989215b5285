//! # Store Configuration
//!
//! Shell configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, and the shell is
//! single-threaded anyway, so no mutex needed.

use std::path::PathBuf;

use tally_core::Money;

/// Storefront configuration.
///
/// ## Fields
/// All fields have defaults good enough for a demo run, so the shell
/// starts with no setup at all.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store name shown in the view header.
    pub store_name: String,

    /// Currency symbol for price display.
    pub currency_symbol: String,

    /// Optional path to a JSON catalog file. `None` means the built-in
    /// demo catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    /// Returns default configuration for a demo run.
    ///
    /// ## Default Values
    /// - Store: "Tally Demo Store"
    /// - Currency symbol: $
    /// - Catalog: built-in demo products
    fn default() -> Self {
        StoreConfig {
            store_name: "Tally Demo Store".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_STORE_NAME`: Override store name
    /// - `TALLY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TALLY_CATALOG`: Path to a JSON catalog file
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("TALLY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("TALLY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(path) = std::env::var("TALLY_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_price(Money::from_cents(99999)), "$999.99");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major_part().abs(),
            amount.minor_part()
        )
    }

    /// Parses a price string produced by [`format_price`](Self::format_price).
    ///
    /// Returns `None` for anything that is not exactly symbol + major +
    /// `.` + two minor digits. The view tests lean on this to read
    /// totals back out of rendered output.
    pub fn parse_price(&self, text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let text = text.strip_prefix(self.currency_symbol.as_str())?;
        let (major, minor) = text.split_once('.')?;
        if minor.len() != 2 {
            return None;
        }

        let major: i64 = major.parse().ok()?;
        let minor: i64 = minor.parse().ok()?;

        let cents = major * 100 + minor;
        Some(Money::from_cents(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StoreConfig::default();
        assert_eq!(config.store_name, "Tally Demo Store");
        assert_eq!(config.currency_symbol, "$");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_format_price_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_cents(99999)), "$999.99");
        assert_eq!(config.format_price(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_price(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_price(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_price_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_price_custom_symbol() {
        let config = StoreConfig {
            currency_symbol: "€".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(config.format_price(Money::from_cents(19999)), "€199.99");
    }

    #[test]
    fn test_parse_price_round_trip() {
        let config = StoreConfig::default();
        for cents in [0, 1, 99, 100, 19999, 99999, 219997, -1234] {
            let amount = Money::from_cents(cents);
            let formatted = config.format_price(amount);
            assert_eq!(config.parse_price(&formatted), Some(amount));
        }
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        let config = StoreConfig::default();
        assert_eq!(config.parse_price("999.99"), None); // missing symbol
        assert_eq!(config.parse_price("$999"), None); // missing minor part
        assert_eq!(config.parse_price("$9.9"), None); // one minor digit
        assert_eq!(config.parse_price("$9.9a"), None);
        assert_eq!(config.parse_price("total"), None);
    }
}
