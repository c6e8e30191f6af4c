mod invoice_document;

pub use invoice_document::{InvoiceDocument, InvoiceRow};
