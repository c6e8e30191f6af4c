// Orders module: draft editing, live totals, submission and history

pub mod models;
pub mod services;

pub use models::{
    CreateOrderItem, CreateOrderRequest, LineItem, LineItemField, LineItemList, OrderDraft,
    OrderId, OrderRecord, OrderRecordItem, OrderTotals,
};
pub use services::{
    compute_totals, prepare_submission, DraftRejection, OrderEntry, OrderHistoryFilter,
    OrderHistoryProvider, OrderService, SubmitOutcome,
};
