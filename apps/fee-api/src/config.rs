//! Fee API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The pricing constants default to the production tariff baked
//! into [`PricingConfig::default`]; each one can be overridden per
//! environment, and the merged result is re-validated before the server
//! starts serving.

use std::env;
use std::str::FromStr;

use courier_core::{Money, PricingConfig, PricingError};

/// Fee API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP server port.
    pub http_port: u16,

    /// The validated pricing tariff.
    pub pricing: PricingConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = PricingConfig::default();

        let pricing = PricingConfig {
            max_delivery_fee: money_var("MAX_DELIVERY_FEE", defaults.max_delivery_fee)?,
            free_threshold: money_var("FREE_THRESHOLD", defaults.free_threshold)?,
            small_order_threshold: money_var("SMALL_ORDER_THRESHOLD", defaults.small_order_threshold)?,
            large_order_threshold: parse_var("LARGE_ORDER_THRESHOLD", defaults.large_order_threshold)?,
            large_order_item_fee: money_var("LARGE_ORDER_ITEM_FEE", defaults.large_order_item_fee)?,
            bulk_order_threshold: parse_var("BULK_ORDER_THRESHOLD", defaults.bulk_order_threshold)?,
            bulk_order_fee: money_var("BULK_ORDER_FEE", defaults.bulk_order_fee)?,
            base_distance_fee: money_var("BASE_DISTANCE_FEE", defaults.base_distance_fee)?,
            base_distance: parse_var("BASE_DISTANCE", defaults.base_distance)?,
            additional_distance_unit: parse_var(
                "ADDITIONAL_DISTANCE_UNIT",
                defaults.additional_distance_unit,
            )?,
            additional_distance_fee: money_var(
                "ADDITIONAL_DISTANCE_FEE",
                defaults.additional_distance_fee,
            )?,
            rush_day: parse_var("RUSH_DAY", defaults.rush_day)?,
            rush_hour_begin: parse_var("RUSH_HOUR_BEGIN", defaults.rush_hour_begin)?,
            rush_hour_end: parse_var("RUSH_HOUR_END", defaults.rush_hour_end)?,
            rush_multiplier_bps: parse_var("RUSH_MULTIPLIER_BPS", defaults.rush_multiplier_bps)?,
        };

        // An overridden tariff must satisfy the same invariants as the default
        pricing.validate()?;

        Ok(ApiConfig {
            http_port: parse_var("HTTP_PORT", 8000)?,
            pricing,
        })
    }
}

/// Reads an environment variable, parsing it when set, using the default
/// when unset. A set-but-unparseable value is a hard error: a typo in the
/// tariff must not silently fall back to defaults.
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Like [`parse_var`] for monetary values, read as whole cents.
fn money_var(key: &str, default: Money) -> Result<Money, ConfigError> {
    Ok(Money::from_cents(parse_var(key, default.cents())?))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid pricing configuration: {0}")]
    InvalidPricing(#[from] PricingError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// One test covering both paths so concurrent tests never race on the
    /// process environment.
    #[test]
    fn test_load_defaults_then_reject_bad_override() {
        let config = ApiConfig::load().expect("defaults must load");
        assert_eq!(config.http_port, 8000);
        assert_eq!(config.pricing.max_delivery_fee.cents(), 1500);
        assert_eq!(config.pricing.rush_day, 4);
        assert!(config.pricing.validate().is_ok());

        env::set_var("MAX_DELIVERY_FEE", "banana");
        let result = ApiConfig::load();
        env::remove_var("MAX_DELIVERY_FEE");
        assert!(matches!(result, Err(ConfigError::InvalidValue(key)) if key == "MAX_DELIVERY_FEE"));

        env::set_var("RUSH_DAY", "9");
        let result = ApiConfig::load();
        env::remove_var("RUSH_DAY");
        assert!(matches!(result, Err(ConfigError::InvalidPricing(_))));
    }
}
