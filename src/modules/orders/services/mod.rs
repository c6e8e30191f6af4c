pub mod history;
pub mod line_item_editor;
pub mod order_calculator;
pub mod order_entry;
pub mod submission;

pub use history::{load_history, OrderHistoryFilter, OrderHistoryProvider};
pub use line_item_editor::{should_auto_grow, EditOutcome};
pub use order_calculator::{compute_totals, compute_totals_for, MemoizedTotals};
pub use order_entry::{OrderEntry, SubmitOutcome};
pub use submission::{prepare_submission, DraftRejection, OrderService};
