// A line item is one product row of an order draft.
//
// Rows are edited field by field while the user types, so every field may be
// temporarily incomplete. `LineItemList` guarantees the draft never runs out
// of rows; the editing transitions live in `services::line_item_editor`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::numeric::MIN_QUANTITY;
use crate::modules::catalog::ProductId;

/// Represents a single, possibly incomplete, row of an order draft
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItem {
    /// Selected catalog product, `None` until the user picks one
    #[serde(default)]
    pub product: Option<ProductId>,

    /// Number of units, kept >= 1 by the editor
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Price per unit; `None` means "not entered yet", which is not the same as free
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit_price: Option<Decimal>,

    /// Per-line discount percentage in [0, 100]
    #[serde(default, rename = "item_discount")]
    pub item_discount_percent: Decimal,
}

/// Editable fields of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineItemField {
    Product,
    Quantity,
    UnitPrice,
    ItemDiscount,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            product: None,
            quantity: default_quantity(),
            unit_price: None,
            item_discount_percent: Decimal::ZERO,
        }
    }
}

impl LineItem {
    /// Completeness predicate shared by live totals and the submission gate:
    /// a product is chosen, the quantity is non-zero and a unit price is entered.
    pub fn is_complete(&self) -> bool {
        self.product.is_some() && self.quantity != 0 && self.unit_price.is_some()
    }
}

fn default_quantity() -> i64 {
    MIN_QUANTITY
}

// Drafts saved by the browser form store an untouched price as "".
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(Decimal),
    }

    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(value)) => Ok(Some(value)),
        Some(RawPrice::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawPrice::Text(text)) => text
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Ordered, never-empty list of line items
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct LineItemList {
    pub(crate) items: Vec<LineItem>,
}

impl LineItemList {
    /// A list holding one default row
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept so the type reads like a collection
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }

    /// Rows that pass the completeness predicate
    pub fn complete_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| item.is_complete())
    }
}

impl Default for LineItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<LineItem>> for LineItemList {
    fn from(items: Vec<LineItem>) -> Self {
        if items.is_empty() {
            Self::new()
        } else {
            Self { items }
        }
    }
}

impl From<LineItemList> for Vec<LineItem> {
    fn from(list: LineItemList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a LineItemList {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
