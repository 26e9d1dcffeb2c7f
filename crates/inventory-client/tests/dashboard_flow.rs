//! End-to-end dashboard flows against a live API over an in-memory store.

use std::cell::{Cell, RefCell};

use chrono::{Days, NaiveDate};
use inventory_api::ServerHandle;
use inventory_client::render::render_dashboard;
use inventory_client::state::EDIT_FIELDS_REQUIRED;
use inventory_client::{ClientError, Dashboard, ProductClient, ProductField, Prompt};
use inventory_core::expiry::today;
use inventory_core::listing::SortField;
use inventory_core::{ProductInput, ProductView};
use inventory_db::{Database, DbConfig};

#[derive(Default)]
struct ScriptedPrompt {
    alerts: RefCell<Vec<String>>,
    confirmations: Cell<usize>,
    decline: bool,
}

impl Prompt for ScriptedPrompt {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirmations.set(self.confirmations.get() + 1);
        !self.decline
    }
}

async fn start_server() -> ServerHandle {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    inventory_api::start(db, "127.0.0.1:0".parse().unwrap())
        .await
        .unwrap()
}

fn days_from_today(days: i64) -> NaiveDate {
    let today = today();
    if days >= 0 {
        today.checked_add_days(Days::new(days as u64)).unwrap()
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
    }
}

fn input(name: &str, quantity: i64, expiry_date: Option<NaiveDate>) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        quantity,
        expiry_date,
    }
}

#[tokio::test]
async fn client_round_trip() {
    let server = start_server().await;
    let client = ProductClient::new(server.products_url());

    let created = client
        .create(&input("Milk Powder", 20, NaiveDate::from_ymd_opt(2025, 1, 1)))
        .await
        .unwrap();

    let all = client.fetch(ProductView::All).await.unwrap();
    assert_eq!(all, vec![created.clone()]);

    let updated = client
        .update(created.id, &input("Milk Powder 1kg", 18, None))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.expiry_date, None);

    let deleted = client.delete(created.id).await.unwrap();
    assert_eq!(deleted.message, "Product deleted successfully");
    assert_eq!(deleted.product, updated);

    let err = client.delete(created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert_eq!(err.user_message(), "Product not found");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn expiry_views_through_client() {
    let server = start_server().await;
    let client = ProductClient::new(server.products_url());

    client.create(&input("Bread", 3, None)).await.unwrap();
    client
        .create(&input("Old Yogurt", 6, Some(days_from_today(-1))))
        .await
        .unwrap();
    client
        .create(&input("Cheddar", 11, Some(days_from_today(4))))
        .await
        .unwrap();

    let names = |products: Vec<inventory_core::Product>| -> Vec<String> {
        products.into_iter().map(|p| p.name).collect()
    };

    assert_eq!(
        names(client.fetch(ProductView::Expired).await.unwrap()),
        vec!["Old Yogurt"]
    );
    assert_eq!(
        names(client.fetch(ProductView::NearExpiry).await.unwrap()),
        vec!["Cheddar"]
    );

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn dashboard_create_edit_delete() {
    let server = start_server().await;
    let mut dashboard = Dashboard::new(
        ProductClient::new(server.products_url()),
        ScriptedPrompt::default(),
    );
    assert!(dashboard.refresh().await);

    // Create through the form; the list refetches afterwards
    dashboard.set_form_field(ProductField::Name, "Bread");
    dashboard.set_form_field(ProductField::Quantity, "3");
    let bread = dashboard.submit_form().await.unwrap();
    assert_eq!(dashboard.form().name(), "");
    assert_eq!(dashboard.list().products().len(), 1);

    let screen = render_dashboard(dashboard.form(), dashboard.list(), today());
    assert!(screen.contains("3 [Low]"));
    assert!(screen.contains("N/A"));

    // Edit with a blank name is rejected locally and keeps the draft
    assert!(dashboard.start_edit(bread.id));
    dashboard.set_edit_field(ProductField::Name, "");
    assert!(dashboard.save_edit().await.is_none());
    assert_eq!(
        dashboard.prompt().alerts.borrow().last().map(String::as_str),
        Some(EDIT_FIELDS_REQUIRED)
    );
    assert!(dashboard.list().editing().is_some());

    dashboard.set_edit_field(ProductField::Name, "Sourdough");
    dashboard.set_edit_field(ProductField::Quantity, "12");
    let saved = dashboard.save_edit().await.unwrap();
    assert_eq!(saved.name, "Sourdough");
    assert!(dashboard.list().editing().is_none());
    assert_eq!(dashboard.list().products()[0].quantity, 12);

    assert!(dashboard.delete(bread.id).await);
    assert_eq!(dashboard.prompt().confirmations.get(), 1);
    assert!(dashboard.list().products().is_empty());

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn dashboard_filters_sort_and_pages() {
    let server = start_server().await;
    let client = ProductClient::new(server.products_url());
    for i in 0..12 {
        let expiry = if i % 3 == 0 {
            Some(days_from_today(-(i + 1)))
        } else {
            None
        };
        client
            .create(&input(&format!("Item {:02}", i), i, expiry))
            .await
            .unwrap();
    }

    let mut dashboard = Dashboard::new(client, ScriptedPrompt::default());
    assert!(dashboard.refresh().await);

    let page = dashboard.list().page();
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.rows.len(), 10);
    assert!(dashboard.next_page());
    assert_eq!(dashboard.list().page().rows.len(), 2);
    assert!(!dashboard.next_page());

    dashboard.sort_by(SortField::Quantity);
    dashboard.sort_by(SortField::Quantity);
    assert!(dashboard.previous_page());
    assert_eq!(dashboard.list().page().rows[0].name, "Item 11");

    // Switching filters refetches and returns to page 1
    assert!(dashboard.set_filter(ProductView::Expired).await);
    assert_eq!(dashboard.list().current_page(), 1);
    assert_eq!(dashboard.list().products().len(), 4);

    dashboard.search("item 0");
    let names: Vec<_> = dashboard
        .list()
        .page()
        .rows
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Item 09", "Item 06", "Item 03", "Item 00"]);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn declined_delete_keeps_row() {
    let server = start_server().await;
    let client = ProductClient::new(server.products_url());
    let milk = client.create(&input("Milk", 8, None)).await.unwrap();

    let prompt = ScriptedPrompt {
        decline: true,
        ..ScriptedPrompt::default()
    };
    let mut dashboard = Dashboard::new(client, prompt);
    dashboard.refresh().await;

    assert!(!dashboard.delete(milk.id).await);
    assert_eq!(dashboard.list().products().len(), 1);
    assert!(dashboard.prompt().alerts.borrow().is_empty());

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn server_side_failures_keep_local_state() {
    let server = start_server().await;
    let client = ProductClient::new(server.products_url());
    let milk = client.create(&input("Milk", 8, None)).await.unwrap();

    let mut dashboard = Dashboard::new(client, ScriptedPrompt::default());
    assert!(dashboard.refresh().await);
    let before = dashboard.list().products().to_vec();

    // Another session removes the row behind the dashboard's back
    dashboard.client().delete(milk.id).await.unwrap();

    assert!(dashboard.start_edit(milk.id));
    dashboard.set_edit_field(ProductField::Quantity, "4");
    assert!(dashboard.save_edit().await.is_none());
    assert_eq!(
        dashboard.prompt().alerts.borrow().last().map(String::as_str),
        Some("Product not found")
    );
    let draft = dashboard.list().editing().unwrap();
    assert_eq!(draft.id, milk.id);
    assert_eq!(draft.name, "Milk");
    assert_eq!(draft.quantity, "4");
    assert_eq!(dashboard.list().products(), before.as_slice());

    dashboard.cancel_edit();
    assert!(!dashboard.delete(milk.id).await);
    assert_eq!(dashboard.prompt().confirmations.get(), 1);
    assert_eq!(dashboard.prompt().alerts.borrow().len(), 2);
    assert_eq!(
        dashboard.prompt().alerts.borrow().last().map(String::as_str),
        Some("Product not found")
    );
    assert_eq!(dashboard.list().products(), before.as_slice());

    server.shutdown().await.unwrap();
}
