//! # Configuration State
//!
//! Session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VITRINE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::info;
use vitrine_core::{FilterConfig, Money, PriceRange, DEFAULT_PRICE_CEILING_CENTS};

use crate::error::ConfigError;

/// Number of generic products in the reference catalog.
pub const DEFAULT_SEED_COUNT: usize = 30;

/// Seed for the reference catalog generator.
pub const DEFAULT_SEED: u64 = 42;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Upper bound of the price filter a fresh session starts with
    pub price_ceiling: Money,

    /// How many generic products the reference catalog generates
    pub seed_count: usize,

    /// RNG seed for the reference catalog
    pub seed: u64,
}

impl Default for SessionConfig {
    /// ## Default Values
    /// - Currency: BRL (R$), 2 decimals
    /// - Price ceiling: R$ 5000.00
    /// - Reference catalog: 30 generic products, seed 42
    fn default() -> Self {
        SessionConfig {
            currency_symbol: "R$".to_string(),
            currency_decimals: 2,
            price_ceiling: Money::from_cents(DEFAULT_PRICE_CEILING_CENTS),
            seed_count: DEFAULT_SEED_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VITRINE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `VITRINE_PRICE_CEILING`: Price filter ceiling in reais (e.g., "5000" or "2999.99")
    /// - `VITRINE_SEED_COUNT`: Number of generated products
    /// - `VITRINE_SEED`: Generator seed
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!(
            price_ceiling = %config.price_ceiling,
            seed_count = config.seed_count,
            seed = config.seed,
            "Session configuration loaded"
        );
        Ok(config)
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(symbol) = lookup("VITRINE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(ceiling) = lookup("VITRINE_PRICE_CEILING") {
            config.price_ceiling = Money::parse_decimal(&ceiling)
                .ok_or_else(|| ConfigError::InvalidValue("VITRINE_PRICE_CEILING".to_string()))?;
        }

        if let Some(count) = lookup("VITRINE_SEED_COUNT") {
            config.seed_count = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VITRINE_SEED_COUNT".to_string()))?;
        }

        if let Some(seed) = lookup("VITRINE_SEED") {
            config.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VITRINE_SEED".to_string()))?;
        }

        Ok(config)
    }

    /// Filters a fresh session starts with: no category, no brand, no minimum
    /// rating, prices from zero to the configured ceiling.
    pub fn default_filters(&self) -> FilterConfig {
        FilterConfig::default().with_price_range(PriceRange::new(Money::zero(), self.price_ceiling))
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::Money;
    /// use vitrine_session::state::SessionConfig;
    ///
    /// let config = SessionConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(299_999)), "R$ 2999.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let whole = amount.reais().abs();
        let digits = usize::from(self.currency_decimals);

        if digits == 0 {
            return format!("{}{} {}", sign, self.currency_symbol, whole);
        }

        // Money only carries centavos: fewer digits truncate, more pad with zeros.
        let centavos = format!("{:02}", amount.cents_part());
        let frac = if digits <= centavos.len() {
            centavos[..digits].to_string()
        } else {
            format!("{centavos:0<digits$}")
        };

        format!("{}{} {}.{}", sign, self.currency_symbol, whole, frac)
    }
}
