//! Session-stored view-state.
//!
//! Everything the original single-page component kept in component state
//! lives in the session: the shopper identity, the cart, and the status of
//! the last checkout attempt. The session store is in-memory; there is no
//! persistence layer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use hardware_store_core::{Email, SessionId};

/// Session-stored shopper identity.
///
/// Shoppers are anonymous guests: both the session id and the email are
/// generated on the first touch of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shopper {
    /// Random per-session identifier, sent as `X-Session-ID` on checkout.
    pub session_id: SessionId,
    /// Generated guest email, used as the order's customer identifier.
    pub email: Email,
}

impl Shopper {
    /// Create a fresh guest shopper with a random session id and email.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            session_id: SessionId::new(),
            email: generate_guest_email(),
        }
    }
}

/// Generate a random guest email like `x7kq@example.com`.
fn generate_guest_email() -> Email {
    let mut rng = rand::rng();
    let local: String = (0..4)
        .map(|_| rng.sample(rand::distr::Alphanumeric) as char)
        .collect::<String>()
        .to_lowercase();

    Email::parse(&format!("{local}@example.com"))
        .expect("generated guest email is structurally valid")
}

/// Session keys for storefront view-state.
pub mod session_keys {
    /// Key for the shopper identity.
    pub const SHOPPER: &str = "shopper";

    /// Key for the cart contents.
    pub const CART: &str = "cart";

    /// Key for the status of the last checkout attempt.
    pub const CHECKOUT_STATUS: &str = "checkout_status";
}
