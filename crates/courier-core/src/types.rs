//! # Domain Types
//!
//! Core domain types used throughout the Courier Fee Service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │  OrderDetails   │   │    FeeQuote     │   │  FeeMultiplier  │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  cart_value     │   │  delivery_fee   │   │  bps (u32)      │        │
//! │  │  delivery_dist. │   │  distance_fee   │   │  12000 = ×1.2   │        │
//! │  │  number_of_items│   │  surcharges     │   └─────────────────┘        │
//! │  │  time (ISO-8601)│   │  rush/cap flags │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  One OrderDetails per request; one FeeQuote per response.               │
//! │  Neither has identity or lifecycle beyond the call.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Fee Multiplier
// =============================================================================

/// A fee multiplier represented in basis points (bps) of the factor.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000 of the factor
/// 12000 bps = ×1.2 (the default rush hour rate)
/// Keeps the rush multiplication in integer math end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeMultiplier(u32);

impl FeeMultiplier {
    /// Creates a multiplier from basis points of the factor.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        FeeMultiplier(bps)
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the factor as a float (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// The identity multiplier (×1.0).
    #[inline]
    pub const fn identity() -> Self {
        FeeMultiplier(10_000)
    }

    /// Checks whether applying this multiplier changes the amount.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == 10_000
    }
}

impl Default for FeeMultiplier {
    fn default() -> Self {
        FeeMultiplier::identity()
    }
}

// =============================================================================
// Order Details
// =============================================================================

/// The inbound order description, one per fee calculation.
///
/// Wire format of `POST /delivery-fee`. All monetary fields are in cents,
/// distances in meters. The struct is fully owned by the request/response
/// cycle and carries no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Total cart value in cents.
    pub cart_value: i64,

    /// Distance between the store and the customer's location, in meters.
    pub delivery_distance: i64,

    /// Number of items in the shopping cart.
    pub number_of_items: i64,

    /// Order time in UTC, ISO-8601 with an explicit offset.
    ///
    /// Kept as the raw string: parsing happens inside the fee pipeline so
    /// that a bad timestamp surfaces as a validation error, not a transport
    /// rejection.
    pub time: String,
}

// =============================================================================
// Fee Quote
// =============================================================================

/// The result of a fee calculation, with the per-rule breakdown.
///
/// The HTTP layer serializes only `delivery_fee`; the breakdown feeds
/// structured logs and tests.
#[derive(Debug, Clone, Serialize)]
pub struct FeeQuote {
    /// Final fee in cents, after multiplier and cap.
    pub delivery_fee: Money,

    /// Distance component before any multiplier.
    pub distance_fee: Money,

    /// Small-order surcharge component.
    pub small_order_surcharge: Money,

    /// Item-count surcharge component (per-item plus bulk).
    pub item_surcharge: Money,

    /// Whether the rush hour multiplier was applied.
    pub rush_applied: bool,

    /// Whether the maximum fee cap reduced the total.
    pub capped: bool,

    /// Whether the free delivery threshold short-circuited the pipeline.
    pub free_delivery: bool,
}

impl FeeQuote {
    /// A quote for an order over the free delivery threshold.
    ///
    /// Every component is zero; no multiplier or cap ran.
    pub fn free() -> Self {
        FeeQuote {
            delivery_fee: Money::zero(),
            distance_fee: Money::zero(),
            small_order_surcharge: Money::zero(),
            item_surcharge: Money::zero(),
            rush_applied: false,
            capped: false,
            free_delivery: true,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_from_bps() {
        let rush = FeeMultiplier::from_bps(12_000);
        assert_eq!(rush.bps(), 12_000);
        assert!((rush.factor() - 1.2).abs() < 0.001);
        assert!(!rush.is_identity());
    }

    #[test]
    fn test_multiplier_identity() {
        let identity = FeeMultiplier::default();
        assert_eq!(identity.bps(), 10_000);
        assert!(identity.is_identity());
    }

    #[test]
    fn test_order_details_deserializes_wire_format() {
        let raw = r#"{
            "cart_value": 790,
            "delivery_distance": 2235,
            "number_of_items": 4,
            "time": "2024-01-15T13:00:00Z"
        }"#;
        let order: OrderDetails = serde_json::from_str(raw).expect("valid order json");
        assert_eq!(order.cart_value, 790);
        assert_eq!(order.delivery_distance, 2235);
        assert_eq!(order.number_of_items, 4);
        assert_eq!(order.time, "2024-01-15T13:00:00Z");
    }

    #[test]
    fn test_free_quote_is_all_zero() {
        let quote = FeeQuote::free();
        assert!(quote.delivery_fee.is_zero());
        assert!(quote.free_delivery);
        assert!(!quote.rush_applied);
        assert!(!quote.capped);
    }
}
