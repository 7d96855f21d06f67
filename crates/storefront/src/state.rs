//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::CheckoutClient;
use crate::config::StorefrontConfig;
use crate::telemetry::TelemetrySink;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static catalog, the checkout client, and the
/// telemetry sink.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    checkout: CheckoutClient,
    telemetry: Arc<dyn TelemetrySink>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The checkout client is pointed at `config.checkout_url`; the
    /// telemetry sink is injected so tests can substitute their own.
    #[must_use]
    pub fn new(config: StorefrontConfig, telemetry: Arc<dyn TelemetrySink>) -> Self {
        let checkout = CheckoutClient::new(config.checkout_url.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                checkout,
                telemetry,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the checkout client.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutClient {
        &self.inner.checkout
    }

    /// Get a reference to the telemetry sink.
    #[must_use]
    pub fn telemetry(&self) -> &dyn TelemetrySink {
        self.inner.telemetry.as_ref()
    }
}
