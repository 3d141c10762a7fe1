//! Re-exports of the core domain primitives consumed by handlers and bins.

pub use user_records_core::{alert, contract, update_plan};
