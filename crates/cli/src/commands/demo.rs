//! `demo` command - a scripted diner session against mock collaborators.
//!
//! Walks the full flow: table assignment, browsing, cart edits, favorites,
//! signup, and checkout, logging store events and notices as they happen.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use emerald_table_core::{Email, TableId};
use emerald_table_session::config::AppConfig;
use emerald_table_session::error::AppError;
use emerald_table_session::menu::MenuCatalog;
use emerald_table_session::services::auth::{AuthBackend, AuthService, SignupRequest};
use emerald_table_session::services::checkout::{CheckoutBackend, CheckoutService};
use emerald_table_session::services::notices::TracingSink;
use emerald_table_session::state::SessionState;
use emerald_table_session::stores::orders::Order;

/// Mock auth collaborator: accepts after a short delay.
struct DemoAuthBackend;

impl AuthBackend for DemoAuthBackend {
    async fn signup(&self, name: &str, email: &Email, _password: &str) -> Result<(), String> {
        sleep(Duration::from_millis(150)).await;
        tracing::info!(%name, %email, "mock auth: account created");
        Ok(())
    }

    async fn login(&self, email: &Email, _password: &str) -> Result<(), String> {
        sleep(Duration::from_millis(150)).await;
        tracing::info!(%email, "mock auth: signed in");
        Ok(())
    }

    async fn google_login(&self) -> Result<(), String> {
        sleep(Duration::from_millis(150)).await;
        Ok(())
    }
}

/// Mock checkout collaborator: accepts every order after a short delay.
struct DemoCheckoutBackend;

impl CheckoutBackend for DemoCheckoutBackend {
    async fn submit(&self, order: &Order) -> Result<(), String> {
        sleep(Duration::from_millis(250)).await;
        tracing::info!(order_id = %order.id, items = order.item_count(), "mock checkout: accepted");
        Ok(())
    }
}

/// Run the scripted session.
pub async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let menu = match &config.menu_file {
        Some(path) => MenuCatalog::from_json_file(path)?,
        None => MenuCatalog::sample(),
    };
    let session = SessionState::new(config, menu);

    // Log every store event as the script runs
    let mut events = session.subscribe();
    let event_logger = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(?event, "store event");
        }
    });

    let notices = Arc::new(TracingSink);
    let auth = AuthService::new(DemoAuthBackend, notices.clone());
    let checkout = CheckoutService::new(DemoCheckoutBackend, notices);

    if !session.table().is_assigned() {
        session.table().assign(TableId::new("t-1"))?;
    }

    // Browse: first two items off the menu
    let first = session
        .menu()
        .items()
        .first()
        .cloned()
        .ok_or_else(|| AppError::NotFound("Menu item".to_owned()))?;
    let second = session
        .menu()
        .items()
        .get(1)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Menu item".to_owned()))?;

    tracing::info!(item = %first.name, image = session.image_for(&first), "viewing item");

    session.cart().add_item(first.clone(), 2)?;
    session.cart().add_item(second.clone(), 1)?;
    session.favorites().add(second.id.clone());

    // Changed our mind on the first item
    session.cart().update_quantity(&first.id, 1);
    tracing::info!(
        lines = session.cart().line_count(),
        total = %session.format_amount(session.cart().total()),
        "cart ready"
    );

    auth.signup(SignupRequest {
        name: "Demo Diner".to_owned(),
        email: "demo@example.com".to_owned(),
        password: "demo-password".to_owned(),
        accepted_terms: true,
    })
    .await?;

    let order = checkout.place_order(&session).await?;
    tracing::info!(
        order_id = %order.id,
        table = ?order.table,
        total = %session.format_amount(order.total),
        "session complete"
    );

    event_logger.abort();
    Ok(())
}
