//! End-to-end tests for the checkout flow.
//!
//! The storefront submits orders to a mock checkout endpoint running in
//! the same process; the mock records headers and bodies and answers
//! with whatever status the test configures.

use hardware_store_integration_tests::TestContext;

#[tokio::test]
async fn test_successful_checkout_shows_thank_you_banner() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;
    ctx.add_item("wrench").await;
    let html = ctx.submit_checkout().await;

    assert!(html.contains("Thank you for your purchase!"));
    assert!(!html.contains("Something went wrong"));
    // The cart itself is left untouched by checkout
    assert!(html.contains("Wrench x2"));
    assert!(html.contains("$10.00"));

    assert!(ctx
        .telemetry
        .breadcrumbs()
        .contains(&"Checkout succeeded".to_string()));
}

#[tokio::test]
async fn test_checkout_request_carries_headers_and_order() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;
    ctx.add_item("wrench").await;
    ctx.submit_checkout().await;

    let requests = ctx.checkout.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    let session_id = request.session_id.as_deref().expect("session id header");
    assert_eq!(session_id.len(), 36);
    let transaction_id = request
        .transaction_id
        .as_deref()
        .expect("transaction id header");
    assert_eq!(transaction_id.len(), 36);

    let email = request.body["email"].as_str().expect("email in body");
    assert!(email.ends_with("@example.com"));

    let cart = request.body["cart"].as_array().expect("cart in body");
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0]["id"], "wrench");
    assert_eq!(cart[0]["price"], 500);
}

#[tokio::test]
async fn test_each_attempt_gets_a_fresh_transaction_id() {
    let ctx = TestContext::new().await;

    ctx.add_item("nails").await;
    ctx.submit_checkout().await;
    ctx.submit_checkout().await;

    let requests = ctx.checkout.requests();
    assert_eq!(requests.len(), 2);
    assert_ne!(requests[0].transaction_id, requests[1].transaction_id);
    // Same shopper, same session
    assert_eq!(requests[0].session_id, requests[1].session_id);
}

#[tokio::test]
async fn test_failed_checkout_shows_error_banner_and_keeps_cart() {
    let ctx = TestContext::new().await;
    ctx.checkout.set_status(500);

    ctx.add_item("hammer").await;
    let html = ctx.submit_checkout().await;

    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("Thank you for your purchase!"));
    assert!(html.contains("Hammer x1"));

    let errors = ctx.telemetry.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("500"));
}

#[tokio::test]
async fn test_empty_cart_checkout_sends_nothing() {
    let ctx = TestContext::new().await;

    let html = ctx.submit_checkout().await;

    assert_eq!(ctx.checkout.request_count(), 0);
    assert!(html.contains("Your cart is empty"));
    assert!(!html.contains("Thank you for your purchase!"));
    assert!(!html.contains("Something went wrong"));
}

#[tokio::test]
async fn test_adding_after_success_clears_thank_you_banner() {
    let ctx = TestContext::new().await;

    ctx.add_item("wrench").await;
    ctx.submit_checkout().await;
    let html = ctx.add_item("nails").await.text().await.expect("body");

    assert!(!html.contains("Thank you for your purchase!"));
    assert!(html.contains("Wrench x1"));
    assert!(html.contains("Nails x1"));
}

#[tokio::test]
async fn test_adding_after_failure_keeps_error_banner() {
    let ctx = TestContext::new().await;
    ctx.checkout.set_status(500);

    ctx.add_item("wrench").await;
    ctx.submit_checkout().await;
    let html = ctx.add_item("nails").await.text().await.expect("body");

    // A failure stays visible until the cart is reset
    assert!(html.contains("Something went wrong"));
}

#[tokio::test]
async fn test_reset_clears_error_banner() {
    let ctx = TestContext::new().await;
    ctx.checkout.set_status(500);

    ctx.add_item("wrench").await;
    ctx.submit_checkout().await;
    let html = ctx.reset_cart().await;

    assert!(!html.contains("Something went wrong"));
    assert!(html.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_failure_then_success_recovers() {
    let ctx = TestContext::new().await;
    ctx.checkout.set_status(502);

    ctx.add_item("wrench").await;
    let html = ctx.submit_checkout().await;
    assert!(html.contains("Something went wrong"));

    ctx.checkout.set_status(200);
    let html = ctx.submit_checkout().await;

    assert!(html.contains("Thank you for your purchase!"));
    assert!(!html.contains("Something went wrong"));
    assert_eq!(ctx.checkout.request_count(), 2);
}

#[tokio::test]
async fn test_non_200_success_codes_count_as_failure() {
    let ctx = TestContext::new().await;
    ctx.checkout.set_status(201);

    ctx.add_item("nails").await;
    let html = ctx.submit_checkout().await;

    assert!(html.contains("Something went wrong"));
    assert!(ctx.telemetry.errors()[0].contains("201"));
}
