// Test Data Factory
//
// Catalog entries and order records shared across tests.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use order_desk::catalog::{Catalog, Company, CompanyId, Product, ProductId};
use order_desk::orders::{LineItem, OrderRecord, OrderRecordItem};

pub const ACME: CompanyId = CompanyId(1);
pub const GLOBEX: CompanyId = CompanyId(2);

pub const WIDGET: ProductId = ProductId(10);
pub const GADGET: ProductId = ProductId(11);

pub fn companies() -> Vec<Company> {
    vec![
        Company {
            id: ACME,
            name: "Acme Ltd".to_string(),
        },
        Company {
            id: GLOBEX,
            name: "Globex AS".to_string(),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: WIDGET,
            name: "Widget".to_string(),
            code: "WDG-01".to_string(),
            price: dec!(100),
        },
        Product {
            id: GADGET,
            name: "Gadget".to_string(),
            code: "GDG-02".to_string(),
            price: dec!(25),
        },
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(companies(), products())
}

/// A complete line item
pub fn line(product: ProductId, quantity: i64, unit_price: Decimal, discount: Decimal) -> LineItem {
    LineItem {
        product: Some(product),
        quantity,
        unit_price: Some(unit_price),
        item_discount_percent: discount,
    }
}

/// Order record with a single widget row and the given server total
pub fn order_record(id: u64, company: CompanyId, created_at: &str, total: Decimal) -> OrderRecord {
    let created_at: DateTime<Utc> = created_at.parse().expect("valid RFC 3339 timestamp");

    OrderRecord {
        id,
        company,
        company_name: companies()
            .into_iter()
            .find(|c| c.id == company)
            .map(|c| c.name)
            .unwrap_or_default(),
        created_at,
        delivery_date: None,
        global_discount: Decimal::ZERO,
        vat_rate: Decimal::ZERO,
        subtotal: total,
        discount_amount: Decimal::ZERO,
        vat_amount: Decimal::ZERO,
        total,
        items: vec![OrderRecordItem {
            id: Some(id * 10),
            product: WIDGET,
            product_name: Some("Widget".to_string()),
            product_code: Some("WDG-01".to_string()),
            quantity: 1,
            unit_price: total,
            item_discount: Decimal::ZERO,
        }],
    }
}
