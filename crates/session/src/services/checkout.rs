//! Order placement against the external checkout collaborator.
//!
//! Checkout snapshots the cart into an immutable [`Order`], submits it, and
//! on acceptance records it in the session history and empties the cart. A
//! declined submission leaves the cart untouched so the diner can retry.

use std::sync::Arc;

use emerald_table_core::format_amount;

use crate::services::notices::{Notice, NoticeSink};
use crate::services::SubmissionFlag;
use crate::state::SessionState;
use crate::stores::orders::Order;

/// Errors that can occur when placing an order.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckoutError {
    /// Nothing in the cart to order.
    #[error("your cart is empty")]
    EmptyCart,

    /// A submission is already in flight.
    #[error("an order is already being placed")]
    SubmissionInFlight,

    /// The collaborator declined the order; the reason is user-safe.
    #[error("{0}")]
    Rejected(String),
}

/// The external checkout collaborator.
///
/// Implementations carry the order to the backend (kitchen, POS). A rejection
/// reason must be safe to surface to the diner verbatim.
pub trait CheckoutBackend: Send + Sync {
    /// Submit an order for fulfilment.
    fn submit(&self, order: &Order) -> impl Future<Output = Result<(), String>> + Send;
}

/// Checkout service.
///
/// At most one order submission runs at a time; the in-flight guard rejects
/// duplicates while the backend call is pending.
pub struct CheckoutService<B> {
    backend: B,
    notices: Arc<dyn NoticeSink>,
    in_flight: SubmissionFlag,
}

impl<B: CheckoutBackend> CheckoutService<B> {
    /// Create a new checkout service.
    pub fn new(backend: B, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            backend,
            notices,
            in_flight: SubmissionFlag::default(),
        }
    }

    /// Whether an order submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_in_flight()
    }

    /// Place an order from the session's current cart.
    ///
    /// On success the order is recorded in the session history, the cart is
    /// cleared, and the accepted [`Order`] is returned. On failure the cart
    /// is left intact.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if there is nothing to order,
    /// [`CheckoutError::SubmissionInFlight`] if another submission is
    /// running, or [`CheckoutError::Rejected`] if the collaborator declines.
    pub async fn place_order(&self, session: &SessionState) -> Result<Order, CheckoutError> {
        let result = self.place_order_inner(session).await;
        match &result {
            Ok(order) => {
                let total = format_amount(order.total, session.config().currency);
                self.notices
                    .push(Notice::Success(format!("Order placed. Total {total}")));
            }
            Err(err) => self.notices.push(Notice::Error(err.to_string())),
        }
        result
    }

    async fn place_order_inner(&self, session: &SessionState) -> Result<Order, CheckoutError> {
        let _guard = self
            .in_flight
            .try_begin()
            .ok_or(CheckoutError::SubmissionInFlight)?;

        let lines = session.cart().lines();
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order::new(lines, session.table().current());
        tracing::debug!(order_id = %order.id, total = %order.total, "submitting order");

        self.backend
            .submit(&order)
            .await
            .map_err(CheckoutError::Rejected)?;

        session.orders().record(order.clone());
        session.cart().clear();

        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use emerald_table_core::MenuItemId;
    use rust_decimal::Decimal;

    use crate::config::AppConfig;
    use crate::menu::MenuCatalog;
    use crate::services::notices::MemorySink;

    struct Accepting;

    impl CheckoutBackend for Accepting {
        async fn submit(&self, _: &Order) -> Result<(), String> {
            Ok(())
        }
    }

    struct Declining;

    impl CheckoutBackend for Declining {
        async fn submit(&self, _: &Order) -> Result<(), String> {
            Err("kitchen is closed".to_owned())
        }
    }

    fn session() -> SessionState {
        SessionState::new(AppConfig::default(), MenuCatalog::sample())
    }

    fn add_sample_item(session: &SessionState, id: &str, quantity: u32) {
        let item = session
            .menu()
            .get(&MenuItemId::new(id))
            .cloned()
            .unwrap();
        session.cart().add_item(item, quantity).unwrap();
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let sink = Arc::new(MemorySink::new());
        let service = CheckoutService::new(Accepting, sink.clone());
        let session = session();

        let err = service.place_order(&session).await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
        assert!(sink.last().unwrap().is_error());
        assert!(session.orders().is_empty());
    }

    #[tokio::test]
    async fn test_successful_checkout_records_and_clears() {
        let sink = Arc::new(MemorySink::new());
        let service = CheckoutService::new(Accepting, sink.clone());
        let session = session();
        add_sample_item(&session, "margherita", 2);

        let order = service.place_order(&session).await.unwrap();

        assert_eq!(order.total, Decimal::new(2500, 2));
        assert!(session.cart().is_empty());
        assert_eq!(session.orders().len(), 1);
        assert_eq!(session.orders().latest().unwrap().id, order.id);

        let notice = sink.last().unwrap();
        assert!(!notice.is_error());
        assert!(notice.message().contains("$25.00"));
    }

    #[tokio::test]
    async fn test_rejected_checkout_leaves_cart_intact() {
        let sink = Arc::new(MemorySink::new());
        let service = CheckoutService::new(Declining, sink.clone());
        let session = session();
        add_sample_item(&session, "tiramisu", 1);

        let err = service.place_order(&session).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Rejected(ref reason) if reason == "kitchen is closed"));

        assert_eq!(session.cart().line_count(), 1);
        assert!(session.orders().is_empty());
        assert_eq!(
            sink.last().unwrap(),
            Notice::Error("kitchen is closed".to_owned())
        );
    }

    #[tokio::test]
    async fn test_order_carries_table_identity() {
        let sink = Arc::new(MemorySink::new());
        let service = CheckoutService::new(Accepting, sink);
        let session = session();
        session
            .table()
            .assign(emerald_table_core::TableId::new("t-7"))
            .unwrap();
        add_sample_item(&session, "mint-lemonade", 1);

        let order = service.place_order(&session).await.unwrap();
        assert_eq!(order.table, Some(emerald_table_core::TableId::new("t-7")));
    }

    #[tokio::test]
    async fn test_guard_resets_after_completion() {
        let sink = Arc::new(MemorySink::new());
        let service = CheckoutService::new(Accepting, sink);
        let session = session();

        add_sample_item(&session, "margherita", 1);
        service.place_order(&session).await.unwrap();
        assert!(!service.is_submitting());

        // A second checkout works once the first completed
        add_sample_item(&session, "tiramisu", 1);
        service.place_order(&session).await.unwrap();
        assert_eq!(session.orders().len(), 2);
    }
}
