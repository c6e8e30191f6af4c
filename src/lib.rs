//! Order Desk Library
//!
//! Order-entry core of the ERP front-end: live pricing of order drafts,
//! line-item editing rules, the submission gate, order history and invoice
//! documents, plus the REST client that talks to the ERP backend.

pub mod client;
pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::catalog;
pub use modules::invoices;
pub use modules::notifications;
pub use modules::orders;
