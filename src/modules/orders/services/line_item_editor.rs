// Editing transitions of the line-item list.
//
// Three rules: rows can always be appended, the last remaining row can never
// be removed, and choosing a product on the last row appends a fresh row.
// The growth rule is a separate pure check (`should_auto_grow`) evaluated
// after the field update.

use tracing::{debug, warn};

use crate::core::numeric::{self, clamp_non_negative};
use crate::modules::catalog::{PriceLookup, ProductId};
use crate::modules::orders::models::{LineItem, LineItemField, LineItemList};

/// Result of a single field edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOutcome {
    /// The target row existed and was updated
    pub applied: bool,
    /// A new empty row was appended as a consequence of the edit
    pub grew: bool,
}

/// Growth policy: a non-empty product chosen on the last row appends a row
pub fn should_auto_grow(index: usize, field: LineItemField, value_is_set: bool, len: usize) -> bool {
    field == LineItemField::Product && value_is_set && index + 1 == len
}

impl LineItemList {
    /// Append a row with default values
    pub fn add_row(&mut self) {
        self.items.push(LineItem::default());
    }

    /// Remove the row at `index`.
    ///
    /// Removing the only row is refused so the list never becomes empty.
    /// Returns whether a row was removed.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            warn!(index, len = self.items.len(), "Ignoring removal of unknown row");
            return false;
        }
        if self.items.len() == 1 {
            debug!("Refusing to remove the only line item");
            return false;
        }

        self.items.remove(index);
        true
    }

    /// Apply raw user input to one field of one row.
    ///
    /// Input is normalized, never rejected:
    /// - product: parsed as an id, anything else clears the selection
    /// - quantity: integer >= 1, unparsable becomes 1
    /// - unit price: empty stays empty, otherwise clamped >= 0
    /// - item discount: clamped to [0, 100], unparsable becomes 0
    pub fn set_field(
        &mut self,
        index: usize,
        field: LineItemField,
        raw: &str,
        prices: &dyn PriceLookup,
    ) -> EditOutcome {
        match field {
            LineItemField::Product => {
                let product = raw.trim().parse::<ProductId>().ok();
                self.select_product(index, product, prices)
            }
            LineItemField::Quantity => {
                self.update_row(index, |item| item.quantity = numeric::normalize_quantity(raw))
            }
            LineItemField::UnitPrice => {
                self.update_row(index, |item| item.unit_price = numeric::normalize_unit_price(raw))
            }
            LineItemField::ItemDiscount => self.update_row(index, |item| {
                item.item_discount_percent = numeric::normalize_discount(raw)
            }),
        }
    }

    /// Choose (or clear) the product of a row.
    ///
    /// When the product changes to one the catalog knows, its list price
    /// overwrites the unit price. Re-selecting the same product keeps any
    /// price the user typed.
    pub fn select_product(
        &mut self,
        index: usize,
        product: Option<ProductId>,
        prices: &dyn PriceLookup,
    ) -> EditOutcome {
        let edit = self.update_row(index, |item| {
            let changed = item.product != product;
            item.product = product;

            if changed {
                if let Some(price) = product.and_then(|id| prices.price_of(id)) {
                    item.unit_price = Some(clamp_non_negative(price));
                }
            }
        });

        if !edit.applied {
            return edit;
        }

        let grew = should_auto_grow(index, LineItemField::Product, product.is_some(), self.len());
        if grew {
            self.add_row();
        }

        EditOutcome {
            applied: true,
            grew,
        }
    }

    fn update_row(&mut self, index: usize, update: impl FnOnce(&mut LineItem)) -> EditOutcome {
        match self.items.get_mut(index) {
            Some(item) => {
                update(item);
                EditOutcome {
                    applied: true,
                    grew: false,
                }
            }
            None => {
                warn!(index, len = self.items.len(), "Ignoring edit of unknown row");
                EditOutcome::default()
            }
        }
    }
}
