use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::auth::{StaticToken, TokenProvider};
use crate::config::ApiConfig;
use crate::core::{AppError, Result};
use crate::modules::catalog::{
    CatalogAdmin, CatalogProvider, Company, CompanyId, CompanyInput, Product, ProductId,
    ProductInput,
};
use crate::modules::orders::{CreateOrderRequest, OrderHistoryProvider, OrderRecord, OrderService};

const COMPANIES_PATH: &str = "companies/";
const PRODUCTS_PATH: &str = "products/";
const ORDERS_PATH: &str = "orders/";

/// HTTP client for the ERP REST API
pub struct ApiClient {
    /// Reads: transient failures are retried with exponential backoff
    reader: ClientWithMiddleware,
    /// Writes: sent exactly once so an order is never created twice
    writer: ClientWithMiddleware,
    api_root: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let reader = ClientBuilder::new(client.clone())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        let writer = ClientBuilder::new(client).build();

        Ok(Self {
            reader,
            writer,
            api_root: config.api_root(),
            tokens,
        })
    }

    /// Client authenticated with the token from configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(config, Arc::new(StaticToken::new(config.access_token.clone())))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(&self.reader, Method::GET, path, None).await?;
        Ok(response.json().await?)
    }

    /// POST or PUT a JSON body; writes are never retried
    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self.execute(&self.writer, method, path, Some(&body)).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.execute(&self.writer, Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Send an authenticated request.
    ///
    /// A 401 triggers one token refresh; if the provider reports a new
    /// token the request is sent once more.
    async fn execute(
        &self,
        client: &ClientWithMiddleware,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let url = self.url(path);
        let mut refreshed = false;

        loop {
            let token = self.tokens.access_token().await?;
            let mut request = client.request(method.clone(), &url).bearer_auth(token);
            if let Some(body) = body {
                request = request.json(body);
            }

            debug!(method = %method, url = %url, "Sending API request");
            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && !refreshed {
                refreshed = true;
                if self.tokens.refresh().await? {
                    warn!(url = %url, "Access token rejected, retrying with refreshed token");
                    continue;
                }
            }

            if status.is_success() {
                return Ok(response);
            }

            let text = response.text().await.unwrap_or_default();
            let message = error_message(status, &text);
            warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                error = %message,
                "API request failed"
            );

            return Err(if status == StatusCode::UNAUTHORIZED {
                AppError::unauthorized(message)
            } else {
                AppError::Api { status, message }
            });
        }
    }
}

/// Pick the most useful message from an error body.
///
/// Looks at `detail`, then `message`, then the first `non_field_errors`
/// entry, and falls back to the status line.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let from_body = parsed.as_ref().and_then(|json| {
        json.get("detail")
            .and_then(|v| v.as_str())
            .or_else(|| json.get("message").and_then(|v| v.as_str()))
            .or_else(|| {
                json.get("non_field_errors")
                    .and_then(|v| v.as_array())
                    .and_then(|errors| errors.first())
                    .and_then(|v| v.as_str())
            })
            .map(str::to_string)
    });

    from_body.unwrap_or_else(|| match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    })
}

#[async_trait]
impl CatalogProvider for ApiClient {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.get_json(COMPANIES_PATH).await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.get_json(PRODUCTS_PATH).await
    }
}

#[async_trait]
impl CatalogAdmin for ApiClient {
    async fn create_company(&self, input: CompanyInput) -> Result<Company> {
        self.send_json(Method::POST, COMPANIES_PATH, &input).await
    }

    async fn update_company(&self, id: CompanyId, input: CompanyInput) -> Result<Company> {
        self.send_json(Method::PUT, &format!("{}{}/", COMPANIES_PATH, id), &input)
            .await
    }

    async fn delete_company(&self, id: CompanyId) -> Result<()> {
        self.delete(&format!("{}{}/", COMPANIES_PATH, id)).await
    }

    async fn create_product(&self, input: ProductInput) -> Result<Product> {
        self.send_json(Method::POST, PRODUCTS_PATH, &input).await
    }

    async fn update_product(&self, id: ProductId, input: ProductInput) -> Result<Product> {
        self.send_json(Method::PUT, &format!("{}{}/", PRODUCTS_PATH, id), &input)
            .await
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        self.delete(&format!("{}{}/", PRODUCTS_PATH, id)).await
    }
}

#[async_trait]
impl OrderService for ApiClient {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderRecord> {
        self.send_json(Method::POST, ORDERS_PATH, &request).await
    }
}

#[async_trait]
impl OrderHistoryProvider for ApiClient {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>> {
        self.get_json(ORDERS_PATH).await
    }
}
