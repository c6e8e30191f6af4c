// In-memory collaborators for the order-entry flow

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;

use order_desk::catalog::{CatalogProvider, Company, Product};
use order_desk::core::{AppError, Result};
use order_desk::notifications::{Notification, Notifier};
use order_desk::orders::services::compute_totals_for;
use order_desk::orders::{
    CreateOrderRequest, LineItem, OrderHistoryProvider, OrderRecord, OrderRecordItem, OrderService,
};

use super::test_data::{companies, products};

/// Serves the fixed test catalog
#[derive(Default)]
pub struct FakeCatalog;

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        Ok(companies())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(products())
    }
}

/// Order list shared between the fake order service and the fake history
#[derive(Default, Clone)]
pub struct OrderStore {
    orders: Arc<Mutex<Vec<OrderRecord>>>,
    fail_listing: Arc<Mutex<bool>>,
}

impl OrderStore {
    pub fn with_orders(orders: Vec<OrderRecord>) -> Self {
        let store = Self::default();
        *store.orders.lock().unwrap() = orders;
        store
    }

    pub fn orders(&self) -> Vec<OrderRecord> {
        self.orders.lock().unwrap().clone()
    }

    pub fn fail_listing(&self, fail: bool) {
        *self.fail_listing.lock().unwrap() = fail;
    }
}

#[async_trait]
impl OrderHistoryProvider for OrderStore {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>> {
        if *self.fail_listing.lock().unwrap() {
            return Err(AppError::Api {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "History unavailable".to_string(),
            });
        }
        Ok(self.orders())
    }
}

/// How the fake backend answers `create_order`
#[derive(Debug, Clone)]
pub enum CreateBehavior {
    Accept,
    TimeOut,
    Refuse(String),
}

/// Records every request and answers according to its behavior
pub struct FakeOrderService {
    store: OrderStore,
    behavior: Mutex<CreateBehavior>,
    requests: Mutex<Vec<CreateOrderRequest>>,
}

impl FakeOrderService {
    pub fn new(store: OrderStore) -> Self {
        Self {
            store,
            behavior: Mutex::new(CreateBehavior::Accept),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn set_behavior(&self, behavior: CreateBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn requests(&self) -> Vec<CreateOrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderService for FakeOrderService {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderRecord> {
        self.requests.lock().unwrap().push(request.clone());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            CreateBehavior::TimeOut => Err(AppError::Timeout("operation timed out".to_string())),
            CreateBehavior::Refuse(message) => Err(AppError::Api {
                status: StatusCode::BAD_REQUEST,
                message,
            }),
            CreateBehavior::Accept => {
                let record = record_from_request(self.store.orders().len() as u64 + 1, &request);
                self.store.orders.lock().unwrap().push(record.clone());
                Ok(record)
            }
        }
    }
}

/// Build what a backend would echo for a request, totals included
fn record_from_request(id: u64, request: &CreateOrderRequest) -> OrderRecord {
    let lines: Vec<LineItem> = request
        .items
        .iter()
        .map(|item| LineItem {
            product: Some(item.product),
            quantity: item.quantity,
            unit_price: Some(item.unit_price),
            item_discount_percent: item.item_discount,
        })
        .collect();
    let totals = compute_totals_for(&lines, request.global_discount, request.vat_rate);

    OrderRecord {
        id,
        company: request.company,
        company_name: String::new(),
        created_at: Utc::now(),
        delivery_date: None,
        global_discount: request.global_discount,
        vat_rate: request.vat_rate,
        subtotal: totals.subtotal,
        discount_amount: totals.discount_amount,
        vat_amount: totals.vat_amount,
        total: totals.total,
        items: request
            .items
            .iter()
            .map(|item| OrderRecordItem {
                id: None,
                product: item.product,
                product_name: None,
                product_code: None,
                quantity: item.quantity,
                unit_price: item.unit_price,
                item_discount: item.item_discount,
            })
            .collect(),
    }
}

/// Keeps every notification for later assertions
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
