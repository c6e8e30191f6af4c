use async_trait::async_trait;
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::orders::models::{CreateOrderItem, CreateOrderRequest, OrderDraft, OrderRecord};

/// Backend service that persists a submitted order
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Create the order and return the backend's authoritative record
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderRecord>;
}

/// Reasons a draft is refused before any network call
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRejection {
    #[error("Please select a company")]
    MissingCompany,

    #[error("Please add at least one product")]
    NoValidItems,
}

impl From<DraftRejection> for AppError {
    fn from(rejection: DraftRejection) -> Self {
        AppError::Validation(rejection.to_string())
    }
}

/// Submission gate: turns a draft into a request or explains why it can't.
///
/// Incomplete rows are dropped using the same predicate the live totals use
/// to skip them.
pub fn prepare_submission(draft: &OrderDraft) -> std::result::Result<CreateOrderRequest, DraftRejection> {
    let company = draft.company.ok_or(DraftRejection::MissingCompany)?;

    let items: Vec<CreateOrderItem> = draft
        .items
        .complete_items()
        .filter_map(|item| {
            Some(CreateOrderItem {
                product: item.product?,
                quantity: item.quantity,
                unit_price: item.unit_price?,
                item_discount: item.item_discount_percent,
            })
        })
        .collect();

    if items.is_empty() {
        return Err(DraftRejection::NoValidItems);
    }

    debug!(
        company = %company,
        items = items.len(),
        dropped = draft.items.len() - items.len(),
        "Draft accepted for submission"
    );

    Ok(CreateOrderRequest {
        company,
        global_discount: draft.global_discount_percent,
        vat_rate: draft.vat_rate_percent,
        items,
    })
}
