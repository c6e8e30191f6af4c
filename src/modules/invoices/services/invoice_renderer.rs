use std::fmt::Write as _;

use crate::core::money::format_try;
use crate::core::{AppError, Result};
use crate::modules::invoices::models::InvoiceDocument;

/// Turns an invoice document into a downloadable file
pub trait InvoiceRenderer: Send + Sync {
    fn render(&self, document: &InvoiceDocument) -> Result<Vec<u8>>;

    /// File extension of the rendered output, without the dot
    fn file_extension(&self) -> &str;

    /// Suggested file name, e.g. `invoice-31.txt`
    fn file_name(&self, document: &InvoiceDocument) -> String {
        format!("invoice-{}.{}", document.order_number, self.file_extension())
    }
}

/// Fixed-width plain-text invoice
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInvoiceRenderer;

const CODE_WIDTH: usize = 12;
const NAME_WIDTH: usize = 28;
const QTY_WIDTH: usize = 6;
const MONEY_WIDTH: usize = 16;
const LINE_WIDTH: usize = CODE_WIDTH + NAME_WIDTH + QTY_WIDTH + 2 * MONEY_WIDTH + 4;

impl TextInvoiceRenderer {
    fn write_document(&self, doc: &InvoiceDocument, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{:>width$}", format!("Order No: {}", doc.order_number), width = LINE_WIDTH)?;
        writeln!(out, "{}", "=".repeat(LINE_WIDTH))?;
        writeln!(out, "Company:       {}", doc.company_name)?;
        writeln!(out, "Order date:    {}", doc.order_date)?;
        match doc.delivery_date {
            Some(date) => writeln!(out, "Delivery date: {}", date)?,
            None => writeln!(out, "Delivery date: -")?,
        }
        writeln!(out, "{}", "-".repeat(LINE_WIDTH))?;

        writeln!(
            out,
            "{:<cw$} {:<nw$} {:>qw$} {:>mw$} {:>mw$}",
            "Code",
            "Product",
            "Qty",
            "Unit",
            "Amount",
            cw = CODE_WIDTH,
            nw = NAME_WIDTH,
            qw = QTY_WIDTH,
            mw = MONEY_WIDTH
        )?;
        for row in &doc.rows {
            writeln!(
                out,
                "{:<cw$} {:<nw$} {:>qw$} {:>mw$} {:>mw$}",
                truncate(&row.code, CODE_WIDTH),
                truncate(&row.name, NAME_WIDTH),
                row.quantity,
                format_try(row.unit_price),
                format_try(row.amount),
                cw = CODE_WIDTH,
                nw = NAME_WIDTH,
                qw = QTY_WIDTH,
                mw = MONEY_WIDTH
            )?;
        }
        writeln!(out, "{}", "-".repeat(LINE_WIDTH))?;

        let vat_label = format!("VAT ({}%):", doc.vat_rate.normalize());
        for (label, amount) in [
            ("Subtotal:", doc.subtotal),
            ("Discount:", doc.discount_amount),
            (vat_label.as_str(), doc.vat_amount),
        ] {
            writeln!(
                out,
                "{:>lw$} {:>mw$}",
                label,
                format_try(amount),
                lw = LINE_WIDTH - MONEY_WIDTH - 1,
                mw = MONEY_WIDTH
            )?;
        }
        writeln!(out, "{}", "=".repeat(LINE_WIDTH))?;
        writeln!(
            out,
            "{:>lw$} {:>mw$}",
            "Grand total:",
            format_try(doc.total),
            lw = LINE_WIDTH - MONEY_WIDTH - 1,
            mw = MONEY_WIDTH
        )
    }
}

impl InvoiceRenderer for TextInvoiceRenderer {
    fn render(&self, document: &InvoiceDocument) -> Result<Vec<u8>> {
        let mut out = String::new();
        self.write_document(document, &mut out)
            .map_err(|e| AppError::internal(format!("Failed to render invoice: {}", e)))?;
        Ok(out.into_bytes())
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
