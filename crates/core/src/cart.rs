//! The shopping cart, checkout order snapshot, and checkout status.
//!
//! The cart is an ordered sequence of catalog items; adding the same item
//! twice represents a quantity of two. Totals and the grouped display are
//! derived, never stored, so they cannot drift from the cart contents.

use serde::{Deserialize, Serialize};

use crate::types::{CatalogItem, Email, ItemId, Price};

/// An ordered sequence of catalog items pending checkout.
///
/// Mutated only by [`Cart::add`] and [`Cart::clear`]; owned exclusively by
/// the shopper's session view-state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CatalogItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the cart. Duplicates are allowed and represent
    /// quantity.
    pub fn add(&mut self, item: CatalogItem) {
        self.items.push(item);
    }

    /// Remove all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// True if the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the cart, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Total price: the sum of every item's unit price.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Group the cart by item id for display, preserving first-seen order.
    ///
    /// Adding wrench, hammer, wrench yields `[Wrench x2, Hammer x1]`.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = Vec::new();
        for item in &self.items {
            if let Some(line) = lines.iter_mut().find(|line| line.item.id == item.id) {
                line.quantity += 1;
            } else {
                lines.push(CartLine {
                    item: item.clone(),
                    quantity: 1,
                });
            }
        }
        lines
    }
}

/// One grouped display line of the cart: an item and its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The catalog item.
    pub item: CatalogItem,
    /// How many times the item appears in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity)
    }

    /// The grouping key of this line.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item.id
    }
}

/// An order submitted at checkout: the shopper's email plus a cart snapshot.
///
/// Constructed at checkout time, sent once, discarded after the response.
/// Serializes to the checkout wire body `{ "email": ..., "cart": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Customer identifier for the order.
    pub email: Email,
    /// Snapshot of the cart at submission time.
    pub cart: Cart,
}

impl Order {
    /// Build an order snapshot from the current email and cart.
    #[must_use]
    pub const fn new(email: Email, cart: Cart) -> Self {
        Self { email, cart }
    }
}

/// Per-attempt checkout state machine.
///
/// ```text
/// Idle -> Pending -> { Succeeded | Failed }
/// ```
///
/// There is no retry transition; a failed attempt stays failed until the
/// cart is reset or a new attempt starts. `Pending` only exists while the
/// single checkout request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// No checkout attempt outstanding.
    #[default]
    Idle,
    /// The checkout request is in flight.
    Pending,
    /// The checkout endpoint answered 200.
    Succeeded,
    /// Transport failure or non-200 response.
    Failed,
}

impl CheckoutStatus {
    /// True if the last attempt succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// True if the last attempt failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wrench() -> CatalogItem {
        CatalogItem::new(
            "wrench",
            "Wrench",
            Price::from_cents(500),
            "/static/images/wrench.png",
        )
    }

    fn nails() -> CatalogItem {
        CatalogItem::new(
            "nails",
            "Nails",
            Price::from_cents(25),
            "/static/images/nails.png",
        )
    }

    fn hammer() -> CatalogItem {
        CatalogItem::new(
            "hammer",
            "Hammer",
            Price::from_cents(1000),
            "/static/images/hammer.png",
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), Price::ZERO);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn test_total_is_sum_of_item_prices() {
        let mut cart = Cart::new();
        cart.add(wrench());
        cart.add(nails());
        cart.add(hammer());
        cart.add(wrench());
        assert_eq!(cart.total(), Price::from_cents(500 + 25 + 1000 + 500));
    }

    #[test]
    fn test_wrench_twice_totals_ten_dollars() {
        let mut cart = Cart::new();
        cart.add(wrench());
        cart.add(wrench());

        assert_eq!(cart.total().to_string(), "10.00");

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.name, "Wrench");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].line_total(), Price::from_cents(1000));
    }

    #[test]
    fn test_lines_preserve_first_seen_order() {
        let mut cart = Cart::new();
        cart.add(hammer());
        cart.add(wrench());
        cart.add(hammer());
        cart.add(nails());

        let ids: Vec<String> = cart
            .lines()
            .iter()
            .map(|line| line.item_id().to_string())
            .collect();
        assert_eq!(ids, vec!["hammer", "wrench", "nails"]);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(wrench());
        cart.add(wrench());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_order_wire_body() {
        let mut cart = Cart::new();
        cart.add(nails());
        let order = Order::new(Email::parse("shopper@example.com").unwrap(), cart);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["email"], "shopper@example.com");
        assert_eq!(json["cart"][0]["id"], "nails");
        assert_eq!(json["cart"][0]["price"], 25);
    }

    #[test]
    fn test_checkout_status_default_is_idle() {
        assert_eq!(CheckoutStatus::default(), CheckoutStatus::Idle);
        assert!(!CheckoutStatus::Idle.is_success());
        assert!(!CheckoutStatus::Idle.is_failure());
    }

    #[test]
    fn test_checkout_status_flags() {
        assert!(CheckoutStatus::Succeeded.is_success());
        assert!(CheckoutStatus::Failed.is_failure());
        assert!(!CheckoutStatus::Pending.is_success());
        assert!(!CheckoutStatus::Pending.is_failure());
    }

    #[test]
    fn test_cart_serde_is_item_array() {
        let mut cart = Cart::new();
        cart.add(wrench());
        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
        assert!(json.starts_with('['));
    }
}
