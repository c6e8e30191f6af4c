pub mod error;
pub mod money;
pub mod numeric;

pub use error::{AppError, Result};
pub use money::{format_try, round_money};
