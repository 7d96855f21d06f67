//! Cart route handlers and session view-state helpers.
//!
//! The cart lives in the shopper's session. Adding and resetting are the
//! only mutations; totals and the grouped display are derived at render
//! time by the store page.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use hardware_store_core::{Cart, CheckoutStatus, ItemId};

use crate::error::{AppError, Result};
use crate::models::session::{Shopper, session_keys};
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the shopper from the session, creating a guest identity on first
/// touch.
///
/// The telemetry scope is tagged with the session id and customer type
/// and the shopper email is attached as the event user on EVERY call, not
/// just on creation: the Sentry tower layer gives each request a fresh
/// hub, so scope writes do not outlive the request that made them.
pub(crate) async fn ensure_shopper(state: &AppState, session: &Session) -> Result<Shopper> {
    let shopper = match session.get::<Shopper>(session_keys::SHOPPER).await? {
        Some(shopper) => shopper,
        None => {
            let shopper = Shopper::guest();
            session.insert(session_keys::SHOPPER, &shopper).await?;
            tracing::info!(session_id = %shopper.session_id, "new shopper session");
            shopper
        }
    };

    let telemetry = state.telemetry();
    telemetry.set_tag("session_id", &shopper.session_id.to_string());
    telemetry.set_tag("customerType", &state.config().customer_type);
    telemetry.set_user(&shopper.email);

    Ok(shopper)
}

/// Load the cart from the session (empty if absent).
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Store the cart in the session.
pub(crate) async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Load the checkout status from the session (`Idle` if absent).
pub(crate) async fn load_status(session: &Session) -> Result<CheckoutStatus> {
    Ok(session
        .get::<CheckoutStatus>(session_keys::CHECKOUT_STATUS)
        .await?
        .unwrap_or_default())
}

/// Store the checkout status in the session.
pub(crate) async fn save_status(session: &Session, status: CheckoutStatus) -> Result<()> {
    session
        .insert(session_keys::CHECKOUT_STATUS, status)
        .await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub item_id: String,
}

/// Add a catalog item to the cart.
///
/// Appending an item clears a previous success flag but leaves a previous
/// failure visible until the cart is reset. There are no other error
/// conditions beyond an unknown item id.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    ensure_shopper(&state, &session).await?;

    let item_id = ItemId::from(form.item_id.as_str());
    let item = state
        .catalog()
        .find(&item_id)
        .ok_or_else(|| AppError::BadRequest(format!("unknown item: {item_id}")))?
        .clone();

    let mut cart = load_cart(&session).await?;
    cart.add(item.clone());
    save_cart(&session, &cart).await?;

    // A new add invalidates the "thank you" banner of a previous purchase
    if load_status(&session).await?.is_success() {
        save_status(&session, CheckoutStatus::Idle).await?;
    }

    let telemetry = state.telemetry();
    telemetry.set_extra(
        "cart",
        serde_json::to_value(&cart).unwrap_or(serde_json::Value::Null),
    );
    telemetry.add_breadcrumb("cart component", &format!("User added {} to cart", item.name));

    tracing::info!(item = %item.id, cart_len = cart.len(), "item added to cart");
    Ok(Redirect::to("/"))
}

/// Empty the cart and clear both checkout outcome flags.
#[instrument(skip(state, session))]
pub async fn reset(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    save_cart(&session, &Cart::new()).await?;
    save_status(&session, CheckoutStatus::Idle).await?;

    let telemetry = state.telemetry();
    telemetry.set_extra("cart", serde_json::Value::String(String::new()));
    telemetry.add_breadcrumb("cart", "User emptied cart");

    tracing::info!("cart emptied");
    Ok(Redirect::to("/"))
}
