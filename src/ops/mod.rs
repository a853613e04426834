//! High-level operations.

pub mod errors;
pub mod export;

pub use errors::ExportError;
pub use export::{export, ExportReport};
