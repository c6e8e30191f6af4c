use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::{CompanyId, ProductId};

/// Payload for `POST orders/`, built only by the submission gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub company: CompanyId,
    pub global_discount: Decimal,
    pub vat_rate: Decimal,
    pub items: Vec<CreateOrderItem>,
}

/// A complete line item as sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderItem {
    pub product: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub item_discount: Decimal,
}
