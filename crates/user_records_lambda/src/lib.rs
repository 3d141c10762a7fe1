//! AWS-oriented adapters and handlers for the user-record API.
//!
//! This crate owns runtime integration details (Lambda handlers, the
//! DynamoDB record store, and the webhook poster) and exposes a single
//! runtime module boundary for contract, update-planning, and alert
//! formatting primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
