//! Integration test harness for the hardware store.
//!
//! Boots the real storefront router on a loopback port next to an
//! in-process mock checkout endpoint, then drives both with a
//! cookie-enabled `reqwest` client so session state behaves exactly as it
//! does for a browser.
//!
//! # Pieces
//!
//! - [`MockCheckout`] - one-route axum server standing in for the external
//!   checkout endpoint; records every request and answers with a
//!   configurable status code.
//! - [`RecordingSink`] - telemetry sink that records tags, breadcrumbs,
//!   and captured errors for assertions.
//! - [`TestContext`] - wires both to a running storefront.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use url::Url;

use hardware_store_core::Email;
use hardware_store_storefront::config::StorefrontConfig;
use hardware_store_storefront::state::AppState;
use hardware_store_storefront::telemetry::TelemetrySink;

// =============================================================================
// Mock checkout endpoint
// =============================================================================

/// One request as seen by the mock checkout endpoint.
#[derive(Debug, Clone)]
pub struct ReceivedCheckout {
    /// Value of the `X-Session-ID` header, if present.
    pub session_id: Option<String>,
    /// Value of the `X-Transaction-ID` header, if present.
    pub transaction_id: Option<String>,
    /// Parsed JSON request body.
    pub body: serde_json::Value,
}

struct MockCheckoutState {
    status: AtomicU16,
    requests: Mutex<Vec<ReceivedCheckout>>,
}

/// In-process stand-in for the external checkout endpoint.
#[derive(Clone)]
pub struct MockCheckout {
    /// Loopback address the mock is listening on.
    pub addr: SocketAddr,
    state: Arc<MockCheckoutState>,
}

impl MockCheckout {
    /// Spawn the mock on an ephemeral loopback port, answering 200.
    pub async fn spawn() -> Self {
        let state = Arc::new(MockCheckoutState {
            status: AtomicU16::new(200),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/checkout", post(receive_checkout))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock checkout listener");
        let addr = listener.local_addr().expect("mock checkout local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock checkout");
        });

        Self { addr, state }
    }

    /// URL of the mock's `/checkout` route.
    #[must_use]
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/checkout", self.addr)).expect("mock checkout url")
    }

    /// Change the status code returned to subsequent requests.
    pub fn set_status(&self, status: u16) {
        self.state.status.store(status, Ordering::SeqCst);
    }

    /// Number of checkout requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("mock requests lock").len()
    }

    /// Snapshot of every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<ReceivedCheckout> {
        self.state
            .requests
            .lock()
            .expect("mock requests lock")
            .clone()
    }
}

async fn receive_checkout(
    State(state): State<Arc<MockCheckoutState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    };

    state
        .requests
        .lock()
        .expect("mock requests lock")
        .push(ReceivedCheckout {
            session_id: header("X-Session-ID"),
            transaction_id: header("X-Transaction-ID"),
            body,
        });

    StatusCode::from_u16(state.status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// =============================================================================
// Recording telemetry sink
// =============================================================================

/// One telemetry call as recorded by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    Tag { key: String, value: String },
    User(String),
    Extra { key: String, value: serde_json::Value },
    Breadcrumb { category: String, message: String },
    Error(String),
}

/// Telemetry sink that records every call for assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingSink {
    fn push(&self, event: TelemetryEvent) {
        self.events.lock().expect("telemetry lock").push(event);
    }

    /// Snapshot of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().expect("telemetry lock").clone()
    }

    /// Messages of recorded breadcrumbs, in order.
    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TelemetryEvent::Breadcrumb { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Rendered messages of captured errors, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TelemetryEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Values recorded for a tag key, in order.
    #[must_use]
    pub fn tag_values(&self, key: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TelemetryEvent::Tag { key: k, value } if k == key => Some(value),
                _ => None,
            })
            .collect()
    }
}

impl TelemetrySink for RecordingSink {
    fn set_tag(&self, key: &str, value: &str) {
        self.push(TelemetryEvent::Tag {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }

    fn set_user(&self, email: &Email) {
        self.push(TelemetryEvent::User(email.to_string()));
    }

    fn set_extra(&self, key: &str, value: serde_json::Value) {
        self.push(TelemetryEvent::Extra {
            key: key.to_owned(),
            value,
        });
    }

    fn add_breadcrumb(&self, category: &str, message: &str) {
        self.push(TelemetryEvent::Breadcrumb {
            category: category.to_owned(),
            message: message.to_owned(),
        });
    }

    fn capture_error(&self, error: &(dyn std::error::Error + 'static)) {
        self.push(TelemetryEvent::Error(error.to_string()));
    }
}

// =============================================================================
// Test context
// =============================================================================

/// A running storefront plus its collaborators.
pub struct TestContext {
    /// Cookie-enabled client bound to the storefront.
    pub client: reqwest::Client,
    /// Base URL of the running storefront (e.g. `http://127.0.0.1:49152`).
    pub base_url: String,
    /// The mock checkout endpoint the storefront submits to.
    pub checkout: MockCheckout,
    /// Recorded telemetry.
    pub telemetry: Arc<RecordingSink>,
}

impl TestContext {
    /// Boot a storefront against a fresh mock checkout endpoint.
    pub async fn new() -> Self {
        let checkout = MockCheckout::spawn().await;
        let telemetry = Arc::new(RecordingSink::default());

        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("loopback addr"),
            port: 0,
            base_url: "http://localhost:0".to_owned(),
            checkout_url: checkout.url(),
            customer_type: "medium-plan".to_owned(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let state = AppState::new(config, Arc::clone(&telemetry) as Arc<dyn TelemetrySink>);
        let app = hardware_store_storefront::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind storefront listener");
        let addr = listener.local_addr().expect("storefront local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve storefront");
        });

        Self {
            client: new_client(),
            base_url: format!("http://{addr}"),
            checkout,
            telemetry,
        }
    }

    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A fresh client with its own cookie jar (a second shopper).
    #[must_use]
    pub fn new_shopper(&self) -> reqwest::Client {
        new_client()
    }

    /// Fetch the store page and return its HTML.
    pub async fn store_page(&self) -> String {
        self.store_page_as(&self.client).await
    }

    /// Fetch the store page with a specific client.
    pub async fn store_page_as(&self, client: &reqwest::Client) -> String {
        client
            .get(self.url("/"))
            .send()
            .await
            .expect("GET /")
            .text()
            .await
            .expect("store page body")
    }

    /// Add a catalog item to the cart; returns the final response after
    /// the redirect back to the store page.
    pub async fn add_item(&self, item_id: &str) -> reqwest::Response {
        self.client
            .post(self.url("/cart/add"))
            .form(&[("item_id", item_id)])
            .send()
            .await
            .expect("POST /cart/add")
    }

    /// Empty the cart; returns the store page HTML after the redirect.
    pub async fn reset_cart(&self) -> String {
        self.client
            .post(self.url("/cart/reset"))
            .send()
            .await
            .expect("POST /cart/reset")
            .text()
            .await
            .expect("reset body")
    }

    /// Submit a checkout; returns the store page HTML after the redirect.
    pub async fn submit_checkout(&self) -> String {
        self.client
            .post(self.url("/checkout"))
            .send()
            .await
            .expect("POST /checkout")
            .text()
            .await
            .expect("checkout body")
    }
}

fn new_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("build test client")
}
