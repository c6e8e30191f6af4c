use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Backend identifier of a customer company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub u64);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(CompanyId)
    }
}

/// Company as returned by `GET companies/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

/// Body of `POST companies/` and `PUT companies/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInput {
    pub name: String,
}

impl CompanyInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Trims the name and refuses a blank one
    pub fn validate(self) -> Result<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Company name is required"));
        }
        Ok(Self::new(name))
    }
}
