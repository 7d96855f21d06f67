//! Checkout submission client.
//!
//! Submits the cart as an order with a single `POST` to the configured
//! checkout endpoint. There is deliberately no retry, backoff, timeout, or
//! cancellation: one request per attempt, and the caller decides what a
//! failure means. The transaction id exists for tracing only; it is not an
//! idempotency key.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;
use url::Url;

use hardware_store_core::{Order, SessionId, TransactionId};

/// Header carrying the per-session identifier.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

/// Header carrying the per-attempt transaction identifier.
pub const TRANSACTION_ID_HEADER: &str = "X-Transaction-ID";

/// Errors a checkout attempt can end in.
///
/// Both kinds are fatal to the attempt; the per-attempt state machine has
/// no retry transition.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("checkout transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a status other than 200.
    #[error("checkout endpoint returned {code}: {message}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
        /// Response body, or the status reason phrase when the body is empty.
        message: String,
    },
}

/// Client for the external checkout endpoint.
///
/// Cheaply cloneable; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: Arc<CheckoutClientInner>,
}

struct CheckoutClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CheckoutClient {
    /// Create a client for the given checkout endpoint.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Arc::new(CheckoutClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Submit an order.
    ///
    /// Sends `{ "email": ..., "cart": [...] }` with the session and
    /// transaction ids as custom headers. Success is exactly HTTP 200.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Transport`] if the request fails at the
    /// network level, or [`CheckoutError::Status`] for any non-200 response.
    #[instrument(skip(self, order), fields(transaction_id = %transaction_id))]
    pub async fn submit(
        &self,
        order: &Order,
        session_id: SessionId,
        transaction_id: TransactionId,
    ) -> Result<(), CheckoutError> {
        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(SESSION_ID_HEADER, session_id.to_string())
            .header(TRANSACTION_ID_HEADER, transaction_id.to_string())
            .json(order)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 200 {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            body
        };

        Err(CheckoutError::Status {
            code: status.as_u16(),
            message,
        })
    }
}
