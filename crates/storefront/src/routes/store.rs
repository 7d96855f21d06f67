//! Store page route handler.
//!
//! Renders the catalog with buy buttons and the sidebar cart summary. All
//! display state is derived from the session: the grouped cart lines, the
//! total, and the success/error banners of the last checkout attempt.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use hardware_store_core::{Cart, CartLine, CatalogItem};

use crate::error::Result;
use crate::filters;
use crate::routes::cart::{ensure_shopper, load_cart, load_status};
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// Catalog item display data for templates.
#[derive(Clone)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

/// One grouped cart line for the sidebar ("Wrench x2" / "$10.00").
#[derive(Clone)]
pub struct CartLineView {
    pub name: String,
    pub quantity: u32,
    pub amount: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub is_empty: bool,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CatalogItem> for ItemView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: format!("${}", item.price),
            image: item.image.clone(),
        }
    }
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.item.name.clone(),
            quantity: line.quantity,
            amount: format!("${}", line.line_total()),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total: format!("${}", cart.total()),
            is_empty: cart.is_empty(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Store page template.
#[derive(Template, WebTemplate)]
#[template(path = "store.html")]
pub struct StoreTemplate {
    pub items: Vec<ItemView>,
    pub cart: CartView,
    pub shopper_email: String,
    pub has_error: bool,
    pub success: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the store page.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<StoreTemplate> {
    let shopper = ensure_shopper(&state, &session).await?;
    let cart = load_cart(&session).await?;
    let status = load_status(&session).await?;

    Ok(StoreTemplate {
        items: state.catalog().items().iter().map(ItemView::from).collect(),
        cart: CartView::from(&cart),
        shopper_email: shopper.email.to_string(),
        has_error: status.is_failure(),
        success: status.is_success(),
    })
}
