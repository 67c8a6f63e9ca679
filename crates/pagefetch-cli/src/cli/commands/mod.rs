//! CLI command handlers, one per mode.

mod fetch;
mod metadata;

pub use fetch::run_fetch;
pub use metadata::{run_metadata, write_metadata};
