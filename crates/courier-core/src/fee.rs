//! # Fee Module
//!
//! The delivery fee pipeline: every pricing rule, applied in a fixed order.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Delivery Fee Pipeline                              │
//! │                                                                         │
//! │  OrderDetails                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate fields ── bad field? ──────────► ValidationError              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse timestamp ── unparseable? ────────► ValidationError              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_value >= free threshold? ── yes ───► fee = 0 (skip everything)    │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  distance fee + small order surcharge + item count surcharge            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rush hour? ── yes ──► × multiplier (round half up)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  min(fee, max fee cap) ──► FeeQuote                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each rule is a total function over validated inputs; the timestamp parse
//! is the only step that can fail.

use crate::error::FeeResult;
use crate::money::Money;
use crate::pricing::PricingConfig;
use crate::schedule::parse_order_time;
use crate::types::{FeeQuote, OrderDetails};
use crate::validation::validate_order;

// =============================================================================
// Distance Fee
// =============================================================================

/// Maps a delivery distance in meters to its fee.
///
/// ## Rules
/// - Up to and including `base_distance`: the flat `base_distance_fee`
/// - Beyond it: one `additional_distance_fee` per started
///   `additional_distance_unit` (partial units always round up)
/// - `additional_distance_unit == 0` disables additional fees entirely
///
/// ## Example
/// ```rust
/// use courier_core::fee::distance_fee;
/// use courier_core::pricing::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert_eq!(distance_fee(&config, 1000).cents(), 200); // base band
/// assert_eq!(distance_fee(&config, 1001).cents(), 300); // one meter over
/// assert_eq!(distance_fee(&config, 1500).cents(), 300); // exact multiple
/// assert_eq!(distance_fee(&config, 1501).cents(), 400);
/// ```
pub fn distance_fee(config: &PricingConfig, distance: i64) -> Money {
    if distance <= config.base_distance {
        return config.base_distance_fee;
    }

    // Explicit disable switch: no additional fee regardless of distance
    if config.additional_distance_unit == 0 {
        return config.base_distance_fee;
    }

    let extra = distance - config.base_distance;
    // Ceiling division: a started unit is a charged unit
    let units = (extra + config.additional_distance_unit - 1) / config.additional_distance_unit;

    config.base_distance_fee + config.additional_distance_fee * units
}

// =============================================================================
// Order Size Surcharges
// =============================================================================

/// Surcharge for carts below the small order threshold.
///
/// The surcharge tops the cart contribution up to the threshold:
/// `max(0, small_order_threshold - cart_value)`.
pub fn small_order_surcharge(config: &PricingConfig, cart_value: i64) -> Money {
    let cart = Money::from_cents(cart_value);
    if cart >= config.small_order_threshold {
        return Money::zero();
    }

    config.small_order_threshold - cart
}

/// Surcharge keyed on the number of items in the cart.
///
/// ## Rules
/// - Items above `large_order_threshold` each pay `large_order_item_fee`
/// - Orders above `bulk_order_threshold` pay the flat `bulk_order_fee` on top
/// - Both apply simultaneously: the bulk fee is additive, not a replacement
///
/// ## Example
/// ```rust
/// use courier_core::fee::item_count_surcharge;
/// use courier_core::pricing::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert_eq!(item_count_surcharge(&config, 4).cents(), 0);
/// assert_eq!(item_count_surcharge(&config, 5).cents(), 50);
/// assert_eq!(item_count_surcharge(&config, 13).cents(), 570); // 9×50 + 120
/// ```
pub fn item_count_surcharge(config: &PricingConfig, number_of_items: i64) -> Money {
    let mut surcharge = Money::zero();

    if number_of_items > config.large_order_threshold {
        let chargeable = number_of_items - config.large_order_threshold;
        surcharge += config.large_order_item_fee * chargeable;
    }

    if number_of_items > config.bulk_order_threshold {
        surcharge += config.bulk_order_fee;
    }

    surcharge
}

// =============================================================================
// Pipeline
// =============================================================================

/// Computes the delivery fee for an order.
///
/// The single entry point of the core: validates the order fields, parses
/// the timestamp, then walks the pricing rules in their fixed order. The
/// free delivery threshold short-circuits every rule, multiplier, and cap;
/// a fee of 0 is returned verbatim.
///
/// ## Example
/// ```rust
/// use courier_core::fee::delivery_fee;
/// use courier_core::pricing::PricingConfig;
/// use courier_core::types::OrderDetails;
///
/// let config = PricingConfig::default();
/// let order = OrderDetails {
///     cart_value: 790,
///     delivery_distance: 2235,
///     number_of_items: 4,
///     time: "2024-01-15T13:00:00Z".to_string(),
/// };
///
/// let quote = delivery_fee(&config, &order).unwrap();
/// assert_eq!(quote.delivery_fee.cents(), 710);
/// ```
pub fn delivery_fee(config: &PricingConfig, order: &OrderDetails) -> FeeResult<FeeQuote> {
    validate_order(order)?;

    // The timestamp must parse for every request, free delivery included:
    // the input contract holds before any pricing rule looks at the order.
    let order_time = parse_order_time(&order.time)?;

    if Money::from_cents(order.cart_value) >= config.free_threshold {
        return Ok(FeeQuote::free());
    }

    let distance = distance_fee(config, order.delivery_distance);
    let small_order = small_order_surcharge(config, order.cart_value);
    let items = item_count_surcharge(config, order.number_of_items);

    let mut fee = distance + small_order + items;

    // Multiplier runs on the summed total, never per component
    let rush_applied = config.rush_window().contains(order_time);
    if rush_applied {
        fee = fee.apply_multiplier(config.rush_multiplier());
    }

    let capped = fee > config.max_delivery_fee;
    fee = fee.min(config.max_delivery_fee);

    Ok(FeeQuote {
        delivery_fee: fee,
        distance_fee: distance,
        small_order_surcharge: small_order,
        item_surcharge: items,
        rush_applied,
        capped,
        free_delivery: false,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
