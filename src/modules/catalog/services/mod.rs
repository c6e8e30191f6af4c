pub mod catalog_admin;
pub mod catalog_provider;

pub use catalog_admin::{CatalogAdmin, CatalogManager};
pub use catalog_provider::{Catalog, CatalogProvider, PriceLookup};
