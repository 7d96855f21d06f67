//! Write-only telemetry sink.
//!
//! Shopper actions and checkout failures are reported through the
//! [`TelemetrySink`] trait rather than through the Sentry SDK's global
//! functions directly. Handlers receive the sink from [`crate::state::AppState`],
//! which keeps the SDK an explicit collaborator and lets tests substitute a
//! recording or no-op implementation.
//!
//! Everything here is fire-and-forget: nothing reads a response back.

use hardware_store_core::Email;

/// Destination for tags, breadcrumbs, and captured errors.
pub trait TelemetrySink: Send + Sync {
    /// Attach a tag to subsequent events (e.g. `session_id`, `transaction_id`).
    fn set_tag(&self, key: &str, value: &str);

    /// Attach the shopper's email as the event user context.
    fn set_user(&self, email: &Email);

    /// Attach a named blob of extra context (e.g. the serialized cart).
    fn set_extra(&self, key: &str, value: serde_json::Value);

    /// Record a lightweight event-log entry attached to later error reports.
    fn add_breadcrumb(&self, category: &str, message: &str);

    /// Report an error.
    fn capture_error(&self, error: &(dyn std::error::Error + 'static));
}

/// Production sink backed by the Sentry SDK's scope API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentrySink;

impl TelemetrySink for SentrySink {
    fn set_tag(&self, key: &str, value: &str) {
        sentry::configure_scope(|scope| {
            scope.set_tag(key, value);
        });
    }

    fn set_user(&self, email: &Email) {
        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                email: Some(email.to_string()),
                ..Default::default()
            }));
        });
    }

    fn set_extra(&self, key: &str, value: serde_json::Value) {
        sentry::configure_scope(|scope| {
            scope.set_extra(key, value);
        });
    }

    fn add_breadcrumb(&self, category: &str, message: &str) {
        sentry::add_breadcrumb(sentry::Breadcrumb {
            category: Some(category.to_string()),
            message: Some(message.to_string()),
            level: sentry::Level::Info,
            ..Default::default()
        });
    }

    fn capture_error(&self, error: &(dyn std::error::Error + 'static)) {
        let event_id = sentry::capture_error(error);
        tracing::debug!(%event_id, "error captured to Sentry");
    }
}

/// Sink that discards everything. Used when no DSN is configured and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn set_tag(&self, _key: &str, _value: &str) {}

    fn set_user(&self, _email: &Email) {}

    fn set_extra(&self, _key: &str, _value: serde_json::Value) {}

    fn add_breadcrumb(&self, _category: &str, _message: &str) {}

    fn capture_error(&self, _error: &(dyn std::error::Error + 'static)) {}
}
