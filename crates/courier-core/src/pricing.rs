//! # Pricing Configuration
//!
//! The process-wide pricing constants for the fee pipeline.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     PricingConfig Lifecycle                             │
//! │                                                                         │
//! │  Process start                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Build (defaults or env overrides) ──► validate() ──► Err? refuse start │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Passed by reference into every fee calculation                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  NEVER mutated again (no locking needed under concurrency)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::money::Money;
use crate::schedule::RushWindow;
use crate::types::FeeMultiplier;

// =============================================================================
// Pricing Config
// =============================================================================

/// All pricing constants, fixed at process start.
///
/// Monetary fields are [`Money`] (cents on the wire), distances are meters,
/// item thresholds are counts. `Default` carries the production tariff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Maximum fee for deliveries. 1500 = 15€.
    pub max_delivery_fee: Money,

    /// Cart value at or above which no delivery fee is applied. 20000 = 200€.
    pub free_threshold: Money,

    /// Minimum cart value to not be charged the small order surcharge.
    /// The surcharge is the cart value's difference from this threshold.
    /// 1000 = 10€.
    pub small_order_threshold: Money,

    /// Number of items the cart may hold before the per-item fee starts.
    /// 4 = charges begin on item 5.
    pub large_order_threshold: i64,

    /// Per-item surcharge for items above `large_order_threshold`. 50 = 0.50€.
    pub large_order_item_fee: Money,

    /// Number of items that triggers the bulk order fee.
    pub bulk_order_threshold: i64,

    /// One-time bulk order fee. 120 = 1.20€.
    pub bulk_order_fee: Money,

    /// Minimum charge for delivery distance.
    /// Covers the initial delivery distance before additional fees invoke.
    pub base_distance_fee: Money,

    /// Distance in meters covered by `base_distance_fee`.
    pub base_distance: i64,

    /// Length in meters that invokes one additional delivery fee.
    /// A value of 0 disables all additional distance fees.
    pub additional_distance_unit: i64,

    /// Fee for each additional distance unit. 100 = 1€.
    pub additional_distance_fee: Money,

    /// Weekday that rush hours occur on (Monday = 0 .. Sunday = 6).
    pub rush_day: u8,

    /// Hour in 24-hr format that rush hour rates begin (inclusive).
    pub rush_hour_begin: u8,

    /// Hour in 24-hr format that rush hour rates end (exclusive).
    pub rush_hour_end: u8,

    /// Rate to multiply the fee total by during rush hours, in basis
    /// points of the factor. 12000 = ×1.2.
    pub rush_multiplier_bps: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            max_delivery_fee: Money::from_cents(1500),
            free_threshold: Money::from_cents(20_000),
            small_order_threshold: Money::from_cents(1000),
            large_order_threshold: 4,
            large_order_item_fee: Money::from_cents(50),
            bulk_order_threshold: 12,
            bulk_order_fee: Money::from_cents(120),
            base_distance_fee: Money::from_cents(200),
            base_distance: 1000,
            additional_distance_unit: 500,
            additional_distance_fee: Money::from_cents(100),
            rush_day: 4, // Friday
            rush_hour_begin: 15,
            rush_hour_end: 19,
            rush_multiplier_bps: 12_000,
        }
    }
}

impl PricingConfig {
    /// Checks every pricing invariant.
    ///
    /// ## Rules
    /// - All fees and thresholds non-negative
    /// - `bulk_order_threshold >= large_order_threshold`
    /// - `rush_day` within 0..=6
    /// - `rush_hour_begin < rush_hour_end <= 24`
    /// - `rush_multiplier_bps >= 10000` (rush never discounts)
    ///
    /// Called once at startup; a config that fails here must not serve.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (field, amount) in [
            ("max_delivery_fee", self.max_delivery_fee),
            ("free_threshold", self.free_threshold),
            ("small_order_threshold", self.small_order_threshold),
            ("large_order_item_fee", self.large_order_item_fee),
            ("bulk_order_fee", self.bulk_order_fee),
            ("base_distance_fee", self.base_distance_fee),
            ("additional_distance_fee", self.additional_distance_fee),
        ] {
            if amount.cents() < 0 {
                return Err(PricingError::NegativeAmount {
                    field: field.to_string(),
                    value: amount.cents(),
                });
            }
        }

        for (field, value) in [
            ("large_order_threshold", self.large_order_threshold),
            ("bulk_order_threshold", self.bulk_order_threshold),
            ("base_distance", self.base_distance),
            ("additional_distance_unit", self.additional_distance_unit),
        ] {
            if value < 0 {
                return Err(PricingError::NegativeAmount {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.bulk_order_threshold < self.large_order_threshold {
            return Err(PricingError::ThresholdOrder {
                large: self.large_order_threshold,
                bulk: self.bulk_order_threshold,
            });
        }

        if self.rush_day > 6 {
            return Err(PricingError::InvalidRushDay { day: self.rush_day });
        }

        if self.rush_hour_begin >= self.rush_hour_end || self.rush_hour_end > 24 {
            return Err(PricingError::InvalidRushWindow {
                begin: self.rush_hour_begin,
                end: self.rush_hour_end,
            });
        }

        if self.rush_multiplier_bps < 10_000 {
            return Err(PricingError::MultiplierBelowUnity {
                bps: self.rush_multiplier_bps,
            });
        }

        Ok(())
    }

    /// Returns the configured rush hour window.
    #[inline]
    pub fn rush_window(&self) -> RushWindow {
        RushWindow {
            day: self.rush_day,
            begin_hour: self.rush_hour_begin,
            end_hour: self.rush_hour_end,
        }
    }

    /// Returns the rush hour multiplier.
    #[inline]
    pub fn rush_multiplier(&self) -> FeeMultiplier {
        FeeMultiplier::from_bps(self.rush_multiplier_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
