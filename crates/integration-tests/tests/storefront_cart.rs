//! End-to-end tests for the store page and cart flows.
//!
//! Each test boots a real storefront on a loopback port and drives it
//! with a cookie-enabled client, so the session round-trips through the
//! same cookie machinery a browser would use.

use hardware_store_integration_tests::{TelemetryEvent, TestContext};

#[tokio::test]
async fn test_first_visit_shows_empty_cart() {
    let ctx = TestContext::new().await;

    let html = ctx.store_page().await;

    assert!(html.contains("Online Hardware Store"));
    assert!(html.contains("Your cart is empty"));
    // All three catalog items are on offer
    assert!(html.contains("Wrench"));
    assert!(html.contains("Nails"));
    assert!(html.contains("Hammer"));
    assert!(html.contains("$5.00"));
    assert!(html.contains("$0.25"));
    assert!(html.contains("$10.00"));
    // Checkout is disabled and there is no reset button yet
    assert!(html.contains("disabled"));
    assert!(!html.contains("Empty cart"));
}

#[tokio::test]
async fn test_first_visit_greets_guest_shopper() {
    let ctx = TestContext::new().await;

    let html = ctx.store_page().await;

    assert!(html.contains("Hi, "));
    assert!(html.contains("@example.com!"));
}

#[tokio::test]
async fn test_adding_same_item_twice_groups_lines() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;
    let html = ctx.add_item("wrench").await.text().await.expect("body");

    assert!(html.contains("Wrench x2"));
    assert!(html.contains("$10.00"));
    assert!(html.contains("Total"));
    // Cart is non-empty now, so checkout is live and reset is offered
    assert!(!html.contains("disabled"));
    assert!(html.contains("Empty cart"));
}

#[tokio::test]
async fn test_mixed_cart_totals_across_items() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;
    ctx.add_item("nails").await;
    ctx.add_item("wrench").await;

    let html = ctx.store_page().await;

    assert!(html.contains("Wrench x2"));
    assert!(html.contains("Nails x1"));
    assert!(html.contains("$10.25"));
}

#[tokio::test]
async fn test_reset_empties_cart() {
    let ctx = TestContext::new().await;

    ctx.add_item("hammer").await;
    let html = ctx.reset_cart().await;

    assert!(html.contains("Your cart is empty"));
    assert!(!html.contains("Hammer x1"));

    let breadcrumbs = ctx.telemetry.breadcrumbs();
    assert!(breadcrumbs.contains(&"User added Hammer to cart".to_string()));
    assert!(breadcrumbs.contains(&"User emptied cart".to_string()));
}

#[tokio::test]
async fn test_adding_unknown_item_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx.add_item("anvil").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_sessions_are_isolated_between_shoppers() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;

    let other = ctx.new_shopper();
    let other_html = ctx.store_page_as(&other).await;
    let own_html = ctx.store_page().await;

    assert!(other_html.contains("Your cart is empty"));
    assert!(own_html.contains("Wrench x1"));
}

#[tokio::test]
async fn test_new_session_tags_telemetry_scope() {
    let ctx = TestContext::new().await;

    ctx.store_page().await;

    let session_tags = ctx.telemetry.tag_values("session_id");
    assert_eq!(session_tags.len(), 1);
    // UUIDs render as 36 characters with hyphens
    assert_eq!(session_tags[0].len(), 36);

    assert_eq!(ctx.telemetry.tag_values("customerType"), ["medium-plan"]);
}

#[tokio::test]
async fn test_shopper_context_is_reapplied_on_every_request() {
    let ctx = TestContext::new().await;

    // Sentry hubs are per-request, so the shopper tags and user must be
    // written again on each request, not only when the session is created
    ctx.store_page().await;
    ctx.store_page().await;

    let session_tags = ctx.telemetry.tag_values("session_id");
    assert_eq!(session_tags.len(), 2);
    assert_eq!(session_tags[0], session_tags[1]);

    assert_eq!(
        ctx.telemetry.tag_values("customerType"),
        ["medium-plan", "medium-plan"]
    );

    let users: Vec<String> = ctx
        .telemetry
        .events()
        .into_iter()
        .filter_map(|e| match e {
            TelemetryEvent::User(email) => Some(email),
            _ => None,
        })
        .collect();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], users[1]);
}

#[tokio::test]
async fn test_breadcrumb_categories() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;
    ctx.reset_cart().await;

    let crumbs: Vec<(String, String)> = ctx
        .telemetry
        .events()
        .into_iter()
        .filter_map(|e| match e {
            TelemetryEvent::Breadcrumb { category, message } => Some((category, message)),
            _ => None,
        })
        .collect();

    assert!(crumbs.contains(&(
        "cart component".to_string(),
        "User added Wrench to cart".to_string()
    )));
    assert!(crumbs.contains(&("cart".to_string(), "User emptied cart".to_string())));
}

#[tokio::test]
async fn test_health_endpoint() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .get(ctx.url("/health"))
        .send()
        .await
        .expect("GET /health");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.expect("body"), "ok");
}
