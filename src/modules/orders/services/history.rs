use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::core::Result;
use crate::modules::catalog::CompanyId;
use crate::modules::orders::models::{OrderId, OrderRecord};

/// Read-only source of submitted orders
#[async_trait]
pub trait OrderHistoryProvider: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>>;
}

/// Filters for the order-history view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistoryFilter {
    pub company: Option<CompanyId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl OrderHistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_company(mut self, company: CompanyId) -> Self {
        self.company = Some(company);
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Whether an order passes the filter.
    ///
    /// The date range only applies once both bounds are set; both bounds
    /// are inclusive and compared on the UTC order date.
    pub fn matches(&self, order: &OrderRecord) -> bool {
        if let Some(company) = self.company {
            if order.company != company {
                return false;
            }
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            let date = order.order_date();
            if date < start || date > end {
                return false;
            }
        }

        true
    }

    /// Keep matching orders, newest first
    pub fn apply(&self, mut orders: Vec<OrderRecord>) -> Vec<OrderRecord> {
        orders.retain(|order| self.matches(order));
        sort_newest_first(&mut orders);
        orders
    }
}

/// Sort by creation time, most recent first
pub fn sort_newest_first(orders: &mut [OrderRecord]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Fetch the history and apply a filter
pub async fn load_history(
    provider: &dyn OrderHistoryProvider,
    filter: &OrderHistoryFilter,
) -> Result<Vec<OrderRecord>> {
    let orders = provider.list_orders().await?;
    let fetched = orders.len();
    let filtered = filter.apply(orders);

    info!(fetched, shown = filtered.len(), "Order history loaded");

    Ok(filtered)
}

/// Look up one order of the history by id
pub async fn find_order(provider: &dyn OrderHistoryProvider, id: OrderId) -> Result<Option<OrderRecord>> {
    let orders = provider.list_orders().await?;
    Ok(orders.into_iter().find(|order| order.id == id))
}
