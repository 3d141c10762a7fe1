pub mod dynamo;
pub mod record_store;
pub mod webhook;
