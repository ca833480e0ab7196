//! # Courier Fee API
//!
//! HTTP hosting layer for the courier-core fee pipeline.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Fee API Server                                  │
//! │                                                                         │
//! │  Client ───► POST /delivery-fee ───► courier-core pipeline              │
//! │                     │                       │                           │
//! │                     │ 400 {"detail": ...}   │ 200 {"delivery_fee": ...} │
//! │                     ▼                       ▼                           │
//! │                 ApiError ◄──────────── FeeQuote                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library exposes the router so integration tests can drive it
//! in-process; `main.rs` only binds a socket around it.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::{create_router, AppState, DeliveryFeeResponse};
