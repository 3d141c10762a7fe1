//! Shared user-record API domain primitives.
//!
//! This crate owns the request/response contracts, update-expression
//! planning, and alert message formatting. It intentionally excludes AWS SDK
//! and Lambda runtime concerns.

pub mod alert;
pub mod contract;
pub mod update_plan;
