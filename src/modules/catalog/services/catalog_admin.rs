use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::core::{AppError, Result};
use crate::modules::catalog::models::{
    Company, CompanyId, CompanyInput, Product, ProductId, ProductInput,
};
use crate::modules::notifications::{Notification, Notifier};

/// Write side of the catalog backend
#[async_trait]
pub trait CatalogAdmin: Send + Sync {
    async fn create_company(&self, input: CompanyInput) -> Result<Company>;
    async fn update_company(&self, id: CompanyId, input: CompanyInput) -> Result<Company>;
    async fn delete_company(&self, id: CompanyId) -> Result<()>;

    async fn create_product(&self, input: ProductInput) -> Result<Product>;
    async fn update_product(&self, id: ProductId, input: ProductInput) -> Result<Product>;
    async fn delete_product(&self, id: ProductId) -> Result<()>;
}

/// Company and product maintenance with user feedback.
///
/// Input is validated before any backend call. Every outcome is reported
/// through the notifier and returned to the caller.
pub struct CatalogManager {
    admin: Arc<dyn CatalogAdmin>,
    notifier: Arc<dyn Notifier>,
}

impl CatalogManager {
    pub fn new(admin: Arc<dyn CatalogAdmin>, notifier: Arc<dyn Notifier>) -> Self {
        Self { admin, notifier }
    }

    /// Create a company, or update it when `id` is given
    pub async fn save_company(&self, id: Option<CompanyId>, input: CompanyInput) -> Result<Company> {
        let input = self.checked(input.validate())?;

        let result = match id {
            Some(id) => self.admin.update_company(id, input).await,
            None => self.admin.create_company(input).await,
        };
        let verb = if id.is_some() { "updated" } else { "added" };

        self.report(result, |company| {
            info!(company_id = %company.id, verb, "Company saved");
            format!("Company {}", verb)
        })
    }

    pub async fn delete_company(&self, id: CompanyId) -> Result<()> {
        let result = self.admin.delete_company(id).await;
        self.report(result, |_| {
            info!(company_id = %id, "Company deleted");
            "Company deleted".to_string()
        })
    }

    /// Create a product, or update it when `id` is given
    pub async fn save_product(&self, id: Option<ProductId>, input: ProductInput) -> Result<Product> {
        let input = self.checked(input.validate())?;

        let result = match id {
            Some(id) => self.admin.update_product(id, input).await,
            None => self.admin.create_product(input).await,
        };
        let verb = if id.is_some() { "updated" } else { "added" };

        self.report(result, |product| {
            info!(product_id = %product.id, code = %product.code, verb, "Product saved");
            format!("Product {}", verb)
        })
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        let result = self.admin.delete_product(id).await;
        self.report(result, |_| {
            info!(product_id = %id, "Product deleted");
            "Product deleted".to_string()
        })
    }

    fn checked<T>(&self, validated: Result<T>) -> Result<T> {
        validated.map_err(|e| {
            warn!(error = %e, "Catalog input rejected");
            self.notifier.notify(Notification::warning(e.user_message()));
            e
        })
    }

    fn report<T>(&self, result: Result<T>, success: impl FnOnce(&T) -> String) -> Result<T> {
        match result {
            Ok(value) => {
                self.notifier.notify(Notification::success(success(&value)));
                Ok(value)
            }
            Err(e) => {
                error!(error = %e, "Catalog update failed");
                self.notifier.notify(Notification::error(format!(
                    "Operation failed: {}",
                    e.user_message()
                )));
                Err(e)
            }
        }
    }
}
