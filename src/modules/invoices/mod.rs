// Invoices module: printable documents for submitted orders

pub mod models;
pub mod services;

pub use models::{InvoiceDocument, InvoiceRow};
pub use services::{InvoiceRenderer, TextInvoiceRenderer};
