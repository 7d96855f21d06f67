//! Newtype IDs for type-safe entity references.
//!
//! Catalog items use string handles (`"wrench"`), while sessions and
//! checkout transactions use random UUIDs. The UUID newtypes exist so a
//! session id can never be passed where a transaction id is expected.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a catalog item (e.g. `"wrench"`).
///
/// Item ids are short human-readable handles defined with the catalog at
/// startup. They double as cart grouping keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Macro to define a random UUID-backed ID wrapper.
///
/// Creates a newtype wrapper around [`Uuid`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - A `new()` constructor generating a random v4 UUID
/// - `Display` rendering the hyphenated UUID form
macro_rules! define_random_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random id.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID value.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_random_id!(
    /// Identifier generated once per shopper session.
    ///
    /// Sent as the `X-Session-ID` header on checkout requests and tagged on
    /// telemetry. Random generation is the only uniqueness guarantee.
    SessionId
);

define_random_id!(
    /// Identifier generated per checkout attempt, used solely for tracing.
    ///
    /// Sent as the `X-Transaction-ID` header. Not an idempotency key.
    TransactionId
);
