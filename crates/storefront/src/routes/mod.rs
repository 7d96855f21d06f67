//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Store page (catalog + sidebar cart)
//! GET  /health        - Health check
//!
//! # Cart
//! POST /cart/add      - Add a catalog item to the cart
//! POST /cart/reset    - Empty the cart and clear checkout flags
//!
//! # Checkout
//! POST /checkout      - Submit the cart to the checkout endpoint
//! ```
//!
//! Every mutating route redirects back to `/`; the store page derives all
//! of its display state (totals, grouped cart, banners) from the session.

pub mod cart;
pub mod checkout;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/reset", post(cart::reset))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Store page
        .route("/", get(store::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout submission
        .route("/checkout", post(checkout::submit))
        // Health check
        .route("/health", get(health))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
