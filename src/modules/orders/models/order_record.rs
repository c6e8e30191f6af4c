use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::{CompanyId, ProductId};

/// Backend identifier of a submitted order
pub type OrderId = u64;

/// Persisted order as echoed by the backend.
///
/// The monetary fields are authoritative: history views and invoices use
/// them verbatim and never recompute them on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub company: CompanyId,
    #[serde(default)]
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub global_discount: Decimal,
    #[serde(default)]
    pub vat_rate: Decimal,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<OrderRecordItem>,
}

/// Line of a persisted order with the product name and code resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecordItem {
    #[serde(default)]
    pub id: Option<u64>,
    pub product: ProductId,
    #[serde(default, alias = "name")]
    pub product_name: Option<String>,
    #[serde(default, alias = "code")]
    pub product_code: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(default)]
    pub item_discount: Decimal,
}

impl OrderRecord {
    /// Calendar date the order was created, in UTC
    pub fn order_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

impl OrderRecordItem {
    /// quantity × unit price, before any discount; saturates at `Decimal::MAX`
    pub fn gross_amount(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }
}
