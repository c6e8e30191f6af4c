use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Backend identifier of a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

/// Product as returned by `GET products/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    /// Catalog list price, used to pre-fill the unit price of a line item
    pub price: Decimal,
}

impl Product {
    /// Label shown in product pickers, e.g. `Bolt M8 (BLT-08)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Body of `POST products/` and `PUT products/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub code: String,
    pub price: Decimal,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, code: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            price,
        }
    }

    /// Name and code are required; a negative price is refused
    pub fn validate(self) -> Result<Self> {
        let name = self.name.trim();
        let code = self.code.trim();
        if name.is_empty() || code.is_empty() {
            return Err(AppError::validation("Product name and code are required"));
        }
        if self.price.is_sign_negative() {
            return Err(AppError::validation("Product price cannot be negative"));
        }
        Ok(Self::new(name, code, self.price))
    }
}
