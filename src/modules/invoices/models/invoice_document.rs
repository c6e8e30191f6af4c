// Renderer-facing projection of a submitted order.
//
// Built from the backend's `OrderRecord` only. The monetary totals are copied
// as-is: the client never recomputes what it prints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::orders::{OrderId, OrderRecord};

/// Everything a renderer needs to lay out one invoice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDocument {
    pub order_number: OrderId,
    pub company_name: String,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub rows: Vec<InvoiceRow>,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub vat_rate: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
}

/// One product row of the invoice table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub code: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// quantity × unit price, as printed in the amount column
    pub amount: Decimal,
}

impl InvoiceDocument {
    pub fn from_record(record: &OrderRecord) -> Self {
        let rows = record
            .items
            .iter()
            .map(|item| InvoiceRow {
                code: item.product_code.clone().unwrap_or_default(),
                name: item
                    .product_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", item.product)),
                quantity: item.quantity,
                unit_price: item.unit_price,
                amount: item.gross_amount(),
            })
            .collect();

        Self {
            order_number: record.id,
            company_name: record.company_name.clone(),
            order_date: record.order_date(),
            delivery_date: record.delivery_date,
            rows,
            subtotal: record.subtotal,
            discount_amount: record.discount_amount,
            vat_rate: record.vat_rate,
            vat_amount: record.vat_amount,
            total: record.total,
        }
    }
}
