//! # courier-core: Pure Pricing Logic for the Courier Fee Service
//!
//! This crate is the **heart** of the Courier Fee Service. It contains the
//! whole delivery fee calculation as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Courier Fee Service Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    HTTP Clients                                 │    │
//! │  │        POST /delivery-fee  {cart_value, distance, items, time}  │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                    fee-api (axum)                               │    │
//! │  │    extract + deserialize, map errors to 400, serve /health      │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ courier-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   money   │  │  pricing  │  │ schedule  │  │    fee    │    │    │
//! │  │   │   Money   │  │  Pricing  │  │   Rush    │  │ pipeline  │    │    │
//! │  │   │Multiplier │  │  Config   │  │  Window   │  │ + rules   │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OrderDetails, FeeQuote, FeeMultiplier)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The immutable pricing configuration
//! - [`schedule`] - Timestamp parsing and rush hour evaluation
//! - [`fee`] - The fee pipeline and its pricing rules
//! - [`error`] - Domain error types
//! - [`validation`] - Order field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use courier_core::fee::delivery_fee;
//! use courier_core::pricing::PricingConfig;
//! use courier_core::types::OrderDetails;
//!
//! let config = PricingConfig::default();
//! config.validate().expect("default tariff is valid");
//!
//! let order = OrderDetails {
//!     cart_value: 790,
//!     delivery_distance: 2235,
//!     number_of_items: 4,
//!     time: "2024-01-15T13:00:00Z".to_string(),
//! };
//!
//! let quote = delivery_fee(&config, &order).unwrap();
//! assert_eq!(quote.delivery_fee.cents(), 710);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fee;
pub mod money;
pub mod pricing;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use courier_core::Money` instead of
// `use courier_core::money::Money`

pub use error::{FeeResult, PricingError, ValidationError};
pub use money::Money;
pub use pricing::PricingConfig;
pub use types::{FeeMultiplier, FeeQuote, OrderDetails};
