// Catalog module: companies and products offered during order entry,
// plus their maintenance screens

pub mod models;
pub mod services;

pub use models::{Company, CompanyId, CompanyInput, Product, ProductId, ProductInput};
pub use services::{Catalog, CatalogAdmin, CatalogManager, CatalogProvider, PriceLookup};
