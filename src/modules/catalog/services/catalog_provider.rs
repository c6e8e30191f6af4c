use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::Result;
use crate::modules::catalog::models::{Company, CompanyId, Product, ProductId};

/// Read-only source of companies and products
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List all companies orders can be placed for
    async fn list_companies(&self) -> Result<Vec<Company>>;

    /// List all products that can appear on a line item
    async fn list_products(&self) -> Result<Vec<Product>>;
}

/// Resolves the catalog price of a product
pub trait PriceLookup {
    fn price_of(&self, product: ProductId) -> Option<Decimal>;
}

/// In-memory snapshot of the catalog taken when the order screen loads
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    companies: Vec<Company>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(companies: Vec<Company>, products: Vec<Product>) -> Self {
        Self {
            companies,
            products,
        }
    }

    /// Fetch companies and products concurrently
    pub async fn load(provider: &dyn CatalogProvider) -> Result<Self> {
        let (companies, products) =
            tokio::try_join!(provider.list_companies(), provider.list_products())?;

        info!(
            companies = companies.len(),
            products = products.len(),
            "Catalog loaded"
        );

        Ok(Self::new(companies, products))
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Companies whose name contains `query`, ignoring case.
    /// A blank query matches everything.
    pub fn search_companies(&self, query: &str) -> Vec<&Company> {
        let needle = query.trim().to_lowercase();
        self.companies
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Products whose name or code contains `query`, ignoring case
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle) || p.code.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl PriceLookup for Catalog {
    fn price_of(&self, product: ProductId) -> Option<Decimal> {
        self.product(product).map(|p| p.price)
    }
}
