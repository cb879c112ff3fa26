//! End-to-end diner session flows: table assignment, cart edits, signup,
//! and checkout against mock collaborators.

#![allow(clippy::unwrap_used)]

use emerald_table_core::TableId;
use emerald_table_integration_tests::{
    item, sink, test_session, AcceptingAuth, AcceptingCheckout, DecliningCheckout,
};
use emerald_table_session::services::auth::{AuthService, SignupRequest};
use emerald_table_session::services::checkout::{CheckoutError, CheckoutService};
use emerald_table_session::stores::table::TableError;
use rust_decimal::Decimal;

#[tokio::test]
async fn test_full_session_from_seating_to_order() {
    let session = test_session();
    session.table().assign(TableId::new("t-12")).unwrap();

    session.cart().add_item(item(&session, "a1"), 2).unwrap();
    session.cart().add_item(item(&session, "c3"), 1).unwrap();
    session.favorites().add(item(&session, "a1").id);

    let notices = sink();
    let auth = AuthService::new(AcceptingAuth, notices.clone());
    auth.signup(SignupRequest {
        name: "Priya Sharma".to_owned(),
        email: "priya@example.com".to_owned(),
        password: "garlic-naan-4".to_owned(),
        accepted_terms: true,
    })
    .await
    .unwrap();

    let checkout = CheckoutService::new(AcceptingCheckout, notices.clone());
    let order = checkout.place_order(&session).await.unwrap();

    // 9.50 * 2 + 3.00 = 22.00
    assert_eq!(order.total, Decimal::new(2200, 2));
    assert_eq!(order.table, Some(TableId::new("t-12")));
    assert_eq!(order.item_count(), 3);

    // The order is in the history and the cart is ready for the next round
    assert!(session.cart().is_empty());
    assert_eq!(session.orders().len(), 1);
    assert_eq!(session.orders().latest().unwrap().id, order.id);

    let last = notices.last().unwrap();
    assert!(!last.is_error());
    assert!(last.message().contains("$22.00"));
}

#[tokio::test]
async fn test_table_is_assigned_once_per_session() {
    let session = test_session();
    session.table().assign(TableId::new("t-1")).unwrap();

    let err = session.table().assign(TableId::new("t-2")).unwrap_err();
    assert!(matches!(err, TableError::AlreadyAssigned(ref id) if id.as_str() == "t-1"));
    assert_eq!(session.table().current(), Some(TableId::new("t-1")));
}

#[tokio::test]
async fn test_declined_order_keeps_cart_for_retry() {
    let session = test_session();
    session.cart().add_item(item(&session, "a1"), 1).unwrap();

    let notices = sink();
    let declining = CheckoutService::new(DecliningCheckout, notices.clone());
    let err = declining.place_order(&session).await.unwrap_err();
    assert!(matches!(err, CheckoutError::Rejected(_)));
    assert_eq!(session.cart().line_count(), 1);
    assert!(session.orders().is_empty());

    // The same cart goes through once the kitchen accepts
    let accepting = CheckoutService::new(AcceptingCheckout, notices);
    accepting.place_order(&session).await.unwrap();
    assert!(session.cart().is_empty());
    assert_eq!(session.orders().len(), 1);
}

#[tokio::test]
async fn test_checkout_requires_a_nonempty_cart() {
    let session = test_session();
    let checkout = CheckoutService::new(AcceptingCheckout, sink());

    let err = checkout.place_order(&session).await.unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
}

#[tokio::test]
async fn test_orders_accumulate_across_checkouts() {
    let session = test_session();
    let checkout = CheckoutService::new(AcceptingCheckout, sink());

    session.cart().add_item(item(&session, "a1"), 1).unwrap();
    let first = checkout.place_order(&session).await.unwrap();

    session.cart().add_item(item(&session, "c3"), 2).unwrap();
    let second = checkout.place_order(&session).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(session.orders().len(), 2);
    assert_eq!(session.orders().latest().unwrap().id, second.id);
}
