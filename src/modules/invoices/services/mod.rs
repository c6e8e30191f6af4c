pub mod invoice_renderer;

pub use invoice_renderer::{InvoiceRenderer, TextInvoiceRenderer};
