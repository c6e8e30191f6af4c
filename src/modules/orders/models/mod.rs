mod draft;
mod line_item;
mod order_record;
mod order_request;
mod totals;

pub use draft::OrderDraft;
pub use line_item::{LineItem, LineItemField, LineItemList};
pub use order_record::{OrderId, OrderRecord, OrderRecordItem};
pub use order_request::{CreateOrderItem, CreateOrderRequest};
pub use totals::OrderTotals;
