use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::Result;
use crate::modules::catalog::{Catalog, CatalogProvider, CompanyId};
use crate::modules::notifications::{Notification, Notifier};
use crate::modules::orders::models::{LineItemField, OrderDraft, OrderRecord, OrderTotals};
use crate::modules::orders::services::history::{sort_newest_first, OrderHistoryProvider};
use crate::modules::orders::services::line_item_editor::EditOutcome;
use crate::modules::orders::services::order_calculator::MemoizedTotals;
use crate::modules::orders::services::submission::{prepare_submission, OrderService};

/// Message shown when the backend does not answer in time
pub const TIMEOUT_MESSAGE: &str = "The server did not respond in time, please try again";

/// Message shown for any other submission failure
pub const SUBMIT_FAILED_MESSAGE: &str = "The order could not be created";

/// Message shown after a successful submission
pub const SUBMITTED_MESSAGE: &str = "Order created";

/// What happened to a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the order; the draft was reset
    Created(OrderRecord),
    /// The gate refused the draft; nothing was sent
    Rejected,
    /// The backend call failed; the draft is left as it was
    Failed { timed_out: bool },
}

/// Owner of the order-entry screen state.
///
/// Holds the draft, the catalog snapshot, the submitted-order list and the
/// cached totals. `submit` borrows the screen mutably across the backend
/// call, so the draft cannot be edited and a second submission cannot start
/// while one is in flight.
pub struct OrderEntry {
    draft: OrderDraft,
    catalog: Catalog,
    orders: Vec<OrderRecord>,
    totals: MemoizedTotals,
    order_service: Arc<dyn OrderService>,
    history: Arc<dyn OrderHistoryProvider>,
    notifier: Arc<dyn Notifier>,
}

impl OrderEntry {
    pub fn new(
        catalog: Catalog,
        order_service: Arc<dyn OrderService>,
        history: Arc<dyn OrderHistoryProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            draft: OrderDraft::new(),
            catalog,
            orders: Vec::new(),
            totals: MemoizedTotals::new(),
            order_service,
            history,
            notifier,
        }
    }

    /// Build the screen: fetch the catalog and the existing orders concurrently
    pub async fn load(
        catalog_provider: &dyn CatalogProvider,
        order_service: Arc<dyn OrderService>,
        history: Arc<dyn OrderHistoryProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let (catalog, mut orders) =
            tokio::try_join!(Catalog::load(catalog_provider), history.list_orders())?;
        sort_newest_first(&mut orders);

        let mut entry = Self::new(catalog, order_service, history, notifier);
        entry.orders = orders;
        Ok(entry)
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Submitted orders, newest first
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Replace the draft wholesale, e.g. with one loaded from disk
    pub fn replace_draft(&mut self, draft: OrderDraft) {
        self.draft = draft;
    }

    pub fn select_company(&mut self, company: Option<CompanyId>) {
        self.draft.set_company(company);
    }

    pub fn set_global_discount(&mut self, raw: &str) {
        self.draft.set_global_discount(raw);
    }

    pub fn set_vat_rate(&mut self, raw: &str) {
        self.draft.set_vat_rate(raw);
    }

    pub fn add_row(&mut self) {
        self.draft.items.add_row();
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        self.draft.items.remove_row(index)
    }

    pub fn set_field(&mut self, index: usize, field: LineItemField, raw: &str) -> EditOutcome {
        self.draft.items.set_field(index, field, raw, &self.catalog)
    }

    /// Totals preview of the current draft
    pub fn totals(&mut self) -> OrderTotals {
        self.totals.get(&self.draft)
    }

    /// Run the submission gate and, if it passes, create the order.
    ///
    /// Every failure ends as a notification. On success the draft is reset
    /// and the order list refreshed; on a backend failure the draft stays
    /// intact so the user can retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match prepare_submission(&self.draft) {
            Ok(request) => request,
            Err(rejection) => {
                warn!(reason = %rejection, "Order draft rejected");
                self.notifier.notify(Notification::warning(rejection.to_string()));
                return SubmitOutcome::Rejected;
            }
        };

        let company = request.company;
        let item_count = request.items.len();

        match self.order_service.create_order(request).await {
            Ok(record) => {
                info!(
                    order_id = record.id,
                    company = %company,
                    items = item_count,
                    total = %record.total,
                    "Order created"
                );
                self.notifier.notify(Notification::success(SUBMITTED_MESSAGE));
                self.draft.reset();
                self.refresh_orders().await;
                SubmitOutcome::Created(record)
            }
            Err(e) => {
                let timed_out = e.is_timeout();
                error!(error = %e, timed_out, company = %company, "Order creation failed");

                let message = if timed_out {
                    TIMEOUT_MESSAGE.to_string()
                } else {
                    format!("{}: {}", SUBMIT_FAILED_MESSAGE, e.user_message())
                };
                self.notifier.notify(Notification::error(message));
                SubmitOutcome::Failed { timed_out }
            }
        }
    }

    /// Reload the order list; failures are reported, not propagated
    pub async fn refresh_orders(&mut self) {
        match self.history.list_orders().await {
            Ok(mut orders) => {
                sort_newest_first(&mut orders);
                self.orders = orders;
            }
            Err(e) => {
                error!(error = %e, "Failed to refresh order list");
                self.notifier
                    .notify(Notification::error(format!("Could not load orders: {}", e.user_message())));
            }
        }
    }
}
