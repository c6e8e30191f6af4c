use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::numeric;
use crate::modules::catalog::CompanyId;
use crate::modules::orders::models::LineItemList;

/// The in-progress order being edited on the order-entry screen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Customer company; required before submission
    #[serde(default)]
    pub company: Option<CompanyId>,

    /// Discount applied to the subtotal after per-line discounts, in [0, 100]
    #[serde(default, rename = "global_discount")]
    pub global_discount_percent: Decimal,

    /// VAT percentage applied after the global discount, >= 0
    #[serde(default, rename = "vat_rate")]
    pub vat_rate_percent: Decimal,

    #[serde(default)]
    pub items: LineItemList,
}

impl OrderDraft {
    /// Empty draft: no company, zero discount and VAT, one default row
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial empty state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_company(&mut self, company: Option<CompanyId>) {
        self.company = company;
    }

    /// Global discount field: clamped to [0, 100], unparsable input becomes 0
    pub fn set_global_discount(&mut self, raw: &str) {
        self.global_discount_percent = numeric::normalize_discount(raw);
    }

    /// VAT field: clamped to >= 0, unparsable input becomes 0
    pub fn set_vat_rate(&mut self, raw: &str) {
        self.vat_rate_percent = numeric::normalize_vat_rate(raw);
    }
}
