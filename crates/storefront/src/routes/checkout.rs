//! Checkout route handler.
//!
//! Drives the per-attempt state machine `Idle -> Pending -> {Succeeded |
//! Failed}`. The browser original threw checkout errors into a global
//! `window.onerror` hook; here the error comes back as a plain `Result`,
//! is reported to the telemetry sink, and flips the session's status so
//! the store page renders its generic error banner. The cart itself is
//! left unchanged in both outcomes.

use axum::{extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use hardware_store_core::{CheckoutStatus, Order, TransactionId};

use crate::error::Result;
use crate::routes::cart::{ensure_shopper, load_cart, save_status};
use crate::state::AppState;

/// Submit the current cart as an order to the checkout endpoint.
///
/// An empty cart never produces an outbound request; the UI disables the
/// button, and this guard covers direct POSTs.
#[instrument(skip(state, session))]
pub async fn submit(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let shopper = ensure_shopper(&state, &session).await?;
    let cart = load_cart(&session).await?;

    if cart.is_empty() {
        tracing::debug!("checkout requested with empty cart");
        return Ok(Redirect::to("/"));
    }

    // One transaction id per attempt, for tracing only
    let transaction_id = TransactionId::new();
    state
        .telemetry()
        .set_tag("transaction_id", &transaction_id.to_string());

    let order = Order::new(shopper.email.clone(), cart);
    save_status(&session, CheckoutStatus::Pending).await?;

    match state
        .checkout()
        .submit(&order, shopper.session_id, transaction_id)
        .await
    {
        Ok(()) => {
            save_status(&session, CheckoutStatus::Succeeded).await?;
            state
                .telemetry()
                .add_breadcrumb("checkout", "Checkout succeeded");
            tracing::info!(%transaction_id, "checkout succeeded");
        }
        Err(err) => {
            state.telemetry().capture_error(&err);
            save_status(&session, CheckoutStatus::Failed).await?;
            tracing::error!(%transaction_id, error = %err, "checkout failed");
        }
    }

    Ok(Redirect::to("/"))
}
