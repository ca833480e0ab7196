//! # Validation Module
//!
//! Structural validation of order fields before any pricing rule runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (fee-api)                                      │
//! │  ├── JSON shape, required fields, integer types                         │
//! │  └── Rejected with 400 before the core runs                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (numeric bounds)                                  │
//! │  ├── cart_value >= 0, delivery_distance >= 0                            │
//! │  └── number_of_items >= 1                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Timestamp parse (schedule module)                             │
//! │  └── the only failure the pipeline itself can produce                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::OrderDetails;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the cart value in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (an empty-value cart still pays for delivery)
pub fn validate_cart_value(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "cart_value".to_string(),
        });
    }

    Ok(())
}

/// Validates the delivery distance in meters.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (pickup point at the store door)
pub fn validate_delivery_distance(meters: i64) -> ValidationResult<()> {
    if meters < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "delivery_distance".to_string(),
        });
    }

    Ok(())
}

/// Validates the item count.
///
/// ## Rules
/// - Must be positive (>= 1): an order with no items is not an order
pub fn validate_item_count(count: i64) -> ValidationResult<()> {
    if count < 1 {
        return Err(ValidationError::MustBePositive {
            field: "number_of_items".to_string(),
        });
    }

    Ok(())
}

/// Validates every structural field of an order.
///
/// The timestamp is deliberately not checked here: parsing it is the rush
/// evaluation step's entry point and reports through the same error type.
pub fn validate_order(order: &OrderDetails) -> ValidationResult<()> {
    validate_cart_value(order.cart_value)?;
    validate_delivery_distance(order.delivery_distance)?;
    validate_item_count(order.number_of_items)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(cart_value: i64, delivery_distance: i64, number_of_items: i64) -> OrderDetails {
        OrderDetails {
            cart_value,
            delivery_distance,
            number_of_items,
            time: "2024-01-15T13:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_validate_cart_value() {
        assert!(validate_cart_value(0).is_ok());
        assert!(validate_cart_value(790).is_ok());
        assert!(validate_cart_value(-1).is_err());
    }

    #[test]
    fn test_validate_delivery_distance() {
        assert!(validate_delivery_distance(0).is_ok());
        assert!(validate_delivery_distance(2235).is_ok());
        assert!(validate_delivery_distance(-5).is_err());
    }

    #[test]
    fn test_validate_item_count() {
        assert!(validate_item_count(1).is_ok());
        assert!(validate_item_count(13).is_ok());
        assert!(validate_item_count(0).is_err());
        assert!(validate_item_count(-2).is_err());
    }

    #[test]
    fn test_validate_order() {
        assert!(validate_order(&order(790, 2235, 4)).is_ok());
        assert!(validate_order(&order(-1, 2235, 4)).is_err());
        assert!(validate_order(&order(790, -1, 4)).is_err());
        assert!(validate_order(&order(790, 2235, 0)).is_err());
    }

    #[test]
    fn test_validation_messages_name_the_field() {
        let err = validate_order(&order(-1, 0, 1)).expect_err("must fail");
        assert_eq!(err.to_string(), "cart_value must be non-negative");

        let err = validate_order(&order(0, 0, 0)).expect_err("must fail");
        assert_eq!(err.to_string(), "number_of_items must be positive");
    }
}
