pub mod models;
pub mod utils;

pub use models::{Cents, Direction, ItemStatus, KpiSummary, LineItem, RawValue};
