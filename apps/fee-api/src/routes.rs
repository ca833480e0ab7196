//! Route layer for the Fee API.
//!
//! Two routes, no pricing decisions:
//! - `POST /delivery-fee` deserializes an order, delegates to the core
//!   pipeline, and returns `{"delivery_fee": <cents>}` or a 400 with a
//!   `detail` message.
//! - `GET /health` for liveness probes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use courier_core::fee::delivery_fee;
use courier_core::{OrderDetails, PricingConfig};

use crate::error::ApiError;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state: the pricing tariff, set once at startup.
///
/// Cloned per request by axum; the `Arc` keeps that clone trivial. The
/// config itself is never mutated after construction, so handlers can run
/// concurrently without any locking.
#[derive(Clone)]
pub struct AppState {
    pricing: Arc<PricingConfig>,
}

impl AppState {
    /// Wraps a validated pricing config for sharing across handlers.
    pub fn new(pricing: PricingConfig) -> Self {
        AppState {
            pricing: Arc::new(pricing),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/delivery-fee", post(calculate_delivery_fee))
        .route("/health", get(health))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Success response of `POST /delivery-fee`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeliveryFeeResponse {
    /// The final delivery fee in cents.
    pub delivery_fee: i64,
}

/// `POST /delivery-fee`: calculate the fee for one order.
///
/// The `Result` extractor turns body rejections (malformed JSON, missing
/// fields, wrong types) into the same `{"detail": ...}` error shape the
/// core's validation errors use.
async fn calculate_delivery_fee(
    State(state): State<AppState>,
    payload: Result<Json<OrderDetails>, JsonRejection>,
) -> Result<Json<DeliveryFeeResponse>, ApiError> {
    let Json(order) = payload?;

    let quote = delivery_fee(&state.pricing, &order)?;

    info!(
        cart_value = order.cart_value,
        delivery_distance = order.delivery_distance,
        number_of_items = order.number_of_items,
        fee_cents = quote.delivery_fee.cents(),
        rush_applied = quote.rush_applied,
        capped = quote.capped,
        free_delivery = quote.free_delivery,
        "Delivery fee calculated"
    );

    Ok(Json(DeliveryFeeResponse {
        delivery_fee: quote.delivery_fee.cents(),
    }))
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// `GET /health`: always 200 while the process is up.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
