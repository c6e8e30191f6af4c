// REST client for the ERP backend.
//
// Implements the catalog, order and history collaborators over HTTP with a
// bearer credential on every request.

pub mod api_client;
pub mod auth;

pub use api_client::ApiClient;
pub use auth::{StaticToken, TokenProvider};
