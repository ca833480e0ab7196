//! # Error Types
//!
//! Domain-specific error types for courier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  courier-core errors (this file)                                        │
//! │  ├── ValidationError  - Order field / timestamp validation failures     │
//! │  └── PricingError     - Invalid pricing configuration at startup        │
//! │                                                                         │
//! │  fee-api errors (app crate)                                             │
//! │  └── ApiError         - What HTTP clients see (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → 400 {"detail": "..."}               │
//! │        PricingError    → ConfigError → process refuses to start         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Order validation errors.
///
/// These errors occur when a request doesn't meet the input contract.
/// The pipeline returns them as values; nothing is raised past the boundary.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric field must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Numeric field must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (the order timestamp).
    ///
    /// ## When This Occurs
    /// - `time` is not ISO-8601 (`"today"`, `"2024-13-99T25:00:00Z"`)
    /// - `time` lacks an explicit UTC offset (`"2024-01-15T13:00:00"`)
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing configuration errors.
///
/// Raised once, at startup, when the loaded `PricingConfig` violates an
/// invariant. A process with broken pricing must not serve requests.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A fee or threshold is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: String, value: i64 },

    /// Rush day is outside the weekday range.
    #[error("rush_day must be 0..=6 (Monday=0), got {day}")]
    InvalidRushDay { day: u8 },

    /// Rush hour window is empty, inverted, or past midnight.
    #[error("rush hours must satisfy begin < end <= 24, got {begin}..{end}")]
    InvalidRushWindow { begin: u8, end: u8 },

    /// Bulk threshold must sit at or above the large-order threshold.
    #[error("bulk_order_threshold ({bulk}) must be >= large_order_threshold ({large})")]
    ThresholdOrder { large: i64, bulk: i64 },

    /// A multiplier below ×1.0 would turn rush hour into a discount.
    #[error("rush_multiplier_bps must be at least 10000 (×1.0), got {bps}")]
    MultiplierBelowUnity { bps: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for fallible fee computations.
pub type FeeResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "cart_value".to_string(),
        };
        assert_eq!(err.to_string(), "cart_value must be non-negative");

        let err = ValidationError::MustBePositive {
            field: "number_of_items".to_string(),
        };
        assert_eq!(err.to_string(), "number_of_items must be positive");

        let err = ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "missing UTC offset".to_string(),
        };
        assert_eq!(err.to_string(), "time has invalid format: missing UTC offset");
    }

    #[test]
    fn test_pricing_error_messages() {
        let err = PricingError::InvalidRushWindow { begin: 19, end: 15 };
        assert_eq!(
            err.to_string(),
            "rush hours must satisfy begin < end <= 24, got 19..15"
        );

        let err = PricingError::ThresholdOrder { large: 4, bulk: 2 };
        assert_eq!(
            err.to_string(),
            "bulk_order_threshold (2) must be >= large_order_threshold (4)"
        );
    }
}
