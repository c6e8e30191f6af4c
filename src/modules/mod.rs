pub mod catalog;
pub mod invoices;
pub mod notifications;
pub mod orders;
